use crate::bluetooth::address::Address;

/// Defines the contract for resolving device manufacturers from addresses.
pub trait VendorRepository {
    /// Retrieves the vendor name for a given address.
    ///
    /// # Returns
    /// * `Some(String)` - The name of the vendor if found.
    /// * `None` - If the OUI is unknown.
    fn get_vendor(&self, address: &Address) -> Option<String>;
}
