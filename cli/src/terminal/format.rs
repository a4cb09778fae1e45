use colored::*;

use bluetap_common::bluetooth::target::{AddressType, Target};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn address_type_to_detail(address_type: AddressType) -> Detail {
    let value = format!("{} ({})", address_type.name(), address_type.code());
    (String::from("Type"), value.color(colors::ACCENT))
}

pub fn vendor_to_detail(vendor: &Option<String>) -> Option<Detail> {
    vendor
        .as_ref()
        .map(|vendor| (String::from("Vendor"), vendor.color(colors::VENDOR)))
}

/// Details printed under the target address: type, vendor, then `extra`.
pub fn target_to_details(
    target: &Target,
    vendor: &Option<String>,
    extra: Vec<(&str, String)>,
) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![address_type_to_detail(target.address_type())];

    if let Some(vendor_detail) = vendor_to_detail(vendor) {
        details.push(vendor_detail);
    }

    details.extend(
        extra
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.color(colors::TEXT_DEFAULT))),
    );
    details
}

/// Indents captured tool output under a failure message.
pub fn indent_block(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("    {line}"))
        .collect()
}
