//! # Target Model
//!
//! The device under test: a validated [`Address`] and the [`AddressType`]
//! BlueZ needs to reach it.
//!
//! A `Target` is built once from command line input and then passed by
//! reference through every stage of the workflow. It is never mutated.

use std::fmt;
use std::str::FromStr;

use crate::bluetooth::address::Address;
use crate::error::{BluetapError, Result};

/// Address type as understood by the kernel management interface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AddressType {
    /// Bluetooth Classic (BR/EDR).
    #[default]
    BrEdr = 0,
    /// Bluetooth Low Energy, public address.
    LePublic = 1,
    /// Bluetooth Low Energy, random address.
    LeRandom = 2,
}

impl AddressType {
    pub const ALL: [AddressType; 3] = [
        AddressType::BrEdr,
        AddressType::LePublic,
        AddressType::LeRandom,
    ];

    /// Numeric code passed to `btmgmt pair -t`.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            AddressType::BrEdr => "BR_EDR",
            AddressType::LePublic => "LE_PUBLIC",
            AddressType::LeRandom => "LE_RANDOM",
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Random LE addresses carry no manufacturer prefix.
    pub fn has_vendor_prefix(self) -> bool {
        !matches!(self, AddressType::LeRandom)
    }
}

impl FromStr for AddressType {
    type Err = BluetapError;

    /// Parses an address type.
    ///
    /// Supported formats:
    /// * **Name**: "BR_EDR", "LE_PUBLIC", "LE_RANDOM".
    /// * **Code**: "0", "1", "2".
    fn from_str(s: &str) -> Result<Self> {
        if let Some(kind) = AddressType::ALL.into_iter().find(|kind| kind.name() == s) {
            return Ok(kind);
        }

        s.parse::<u8>()
            .ok()
            .and_then(AddressType::from_code)
            .ok_or_else(|| BluetapError::InvalidAddressType(s.to_string()))
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The device under test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    address: Address,
    address_type: AddressType,
}

impl Target {
    pub fn new(address: Address, address_type: AddressType) -> Self {
        Self {
            address,
            address_type,
        }
    }

    /// Builds a target from raw user input, validating the address first.
    pub fn parse(raw_address: &str, address_type: AddressType) -> Result<Self> {
        Ok(Self::new(Address::parse(raw_address)?, address_type))
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn address_type(&self) -> AddressType {
        self.address_type
    }
}

impl From<Address> for Target {
    fn from(address: Address) -> Self {
        Self::new(address, AddressType::default())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.address, self.address_type)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
