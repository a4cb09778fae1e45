//! # Bluetooth Device Address
//!
//! Parses and canonicalizes the textual form of a device address.
//!
//! Only the strict form is accepted: six groups of exactly two hexadecimal
//! digits separated by colons (`aa:bb:cc:dd:ee:ff`), in any letter case.
//! The canonical form is lowercase.

use std::fmt;
use std::str::FromStr;

use pnet::util::MacAddr;

use crate::error::{BluetapError, Result};

const OCTETS: usize = 6;
const GROUP_LEN: usize = 2;

/// A validated Bluetooth hardware address.
///
/// Equality compares octets, so two addresses parsed from the same
/// digits in different letter case are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address(MacAddr);

impl Address {
    /// Validates `raw` and returns the normalized address.
    pub fn parse(raw: &str) -> Result<Self> {
        let [a, b, c, d, e, f] = parse_octets(raw).ok_or_else(|| BluetapError::InvalidAddress {
            input: raw.to_string(),
        })?;
        Ok(Self(MacAddr::new(a, b, c, d, e, f)))
    }

    pub fn octets(&self) -> [u8; OCTETS] {
        let MacAddr(a, b, c, d, e, f) = self.0;
        [a, b, c, d, e, f]
    }

    /// Uppercase form with underscores instead of colons (`AA_BB_CC_DD_EE_FF`),
    /// as used by BlueZ in PulseAudio/PipeWire object names.
    pub fn normalized(&self) -> String {
        self.to_string().to_uppercase().replace(':', "_")
    }
}

/// Checks whether `raw` is a well-formed address without building one.
pub fn is_valid(raw: &str) -> bool {
    parse_octets(raw).is_some()
}

fn parse_octets(raw: &str) -> Option<[u8; OCTETS]> {
    let mut octets = [0u8; OCTETS];
    let mut groups = raw.split(':');

    for octet in octets.iter_mut() {
        let group = groups.next()?;
        if group.len() != GROUP_LEN || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        *octet = u8::from_str_radix(group, 16).ok()?;
    }

    match groups.next() {
        Some(_) => None,
        None => Some(octets),
    }
}

impl FromStr for Address {
    type Err = BluetapError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // MacAddr renders zero-padded lowercase hex.
        write!(f, "{}", self.0)
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
