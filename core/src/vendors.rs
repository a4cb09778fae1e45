use std::sync::OnceLock;

use bluetap_common::bluetooth::address::Address;
use bluetap_common::vendors::VendorRepository;
use mac_oui::Oui;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// Retrieves or initializes the **Organizationally unique identifier** database.
///
/// `None` when the bundled database cannot be loaded.
fn get_oui_db() -> Option<&'static Oui> {
    OUI_DB.get_or_init(|| Oui::default().ok()).as_ref()
}

pub struct MacOuiRepo;

impl VendorRepository for MacOuiRepo {
    fn get_vendor(&self, address: &Address) -> Option<String> {
        let db = get_oui_db()?;
        match db.lookup_by_mac(&address.to_string()) {
            Ok(Some(entry)) => Some(entry.company_name.clone()),
            _ => None,
        }
    }
}
