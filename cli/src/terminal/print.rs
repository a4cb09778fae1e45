use colored::*;
use unicode_width::UnicodeWidthStr;

use bluetap_common::{
    bluetooth::target::Target, error::BluetapError, error, log::PRINT_TARGET, vendors::VendorRepository, warn,
};
use bluetap_core::vendors::MacOuiRepo;

use crate::terminal::{colors, format};

pub const TOTAL_WIDTH: usize = 64;

const BANNER_0: &str = r#"
                ░█▀▄░█░░░█░█░█▀▀░▀█▀░█▀█░█▀█░
                ░█▀▄░█░░░█░█░█▀▀░░█░░█▀█░█▀▀░
                ░▀▀░░▀▀▀░▀▀▀░▀▀▀░░▀░░▀░▀░▀░░░
                ░▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀░
"#;

const BANNER_1: &str = r#"
              _     _            _
             | |__ | |_   _  ___| |_ __ _ _ __
             | '_ \| | | | |/ _ \ __/ _` | '_ \
             | |_) | | |_| |  __/ || (_| | |_) |
             |_.__/|_|\__,_|\___|\__\__,_| .__/
                                         |_|
"#;

pub fn print(msg: &str) {
    tracing::info!(target: PRINT_TARGET, "{msg}");
}

pub fn banner(no_banner: bool) {
    if no_banner {
        return;
    }

    let text_content: String = format!("⟦ BLUETAP v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_blue().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();

    match rand::random_range(0..2u8) {
        0 => print(&format!("{}", BANNER_0.blue())),
        _ => print(&format!("{}", BANNER_1.bright_blue())),
    }
    print(&format!("{}{}{}", sep, text, sep));
    centerln("Bluetooth audio recording without user interaction");
    print("");
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    let output: String = format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::MAC_ADDR).bold()
    );
    print(&output);
}

pub fn as_tree_one_level(key_value_pair: Vec<format::Detail>) {
    let key_width: usize = key_value_pair
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(key_width + 1 - key.len()).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}

/// Prints the target as a one-level tree, with its vendor when known.
pub fn target_summary(target: &Target, extra: Vec<(&str, String)>) {
    let vendor: Option<String> = if target.address_type().has_vendor_prefix() {
        MacOuiRepo.get_vendor(target.address())
    } else {
        None
    };

    header("target");
    tree_head(0, &target.address().to_string());
    as_tree_one_level(format::target_to_details(target, &vendor, extra));
}

pub fn question(msg: &str) {
    let symbol: ColoredString = "[?]".blue().bold();
    print(&format!("{} {} {}", symbol, msg, "[Y/n]".color(colors::SEPARATOR)));
}

/// Reports a failed run, including the captured output of a failed tool.
pub fn failure(err: &anyhow::Error) {
    match err.downcast_ref::<BluetapError>() {
        Some(BluetapError::CommandExecution {
            command,
            stdout,
            stderr,
        }) => {
            error!("Error while executing command \"{command}\"");
            print_captured("stdout", stdout);
            print_captured("stderr", stderr);
        }
        Some(BluetapError::Interrupted { during }) => {
            warn!("Interrupted during {during}");
        }
        _ => {
            error!("{err:#}");
        }
    }
}

fn print_captured(stream: &str, text: &str) {
    let lines: Vec<String> = format::indent_block(text);
    if lines.is_empty() {
        return;
    }

    print(&format!("  {}{}", stream.color(colors::FAILURE), ":".color(colors::SEPARATOR)));
    for line in lines {
        print(&line);
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg.color(colors::TEXT_DEFAULT)));
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
