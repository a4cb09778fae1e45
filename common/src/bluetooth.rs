//! # Bluetooth Domain Models
//!
//! * [`address::Address`]: A validated 6-octet device address.
//! * [`target::Target`]: The device under test (address + address type).
//! * [`capability::IoCapability`]: The I/O capability announced while pairing.

pub mod address;
pub mod capability;
pub mod target;
