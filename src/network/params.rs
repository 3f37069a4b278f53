//! Network profiles
//!
//! A profile is an immutable value naming a deployment and the version byte
//! its addresses carry. Addresses borrow profiles, they never own them.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::constants::{MAINNET_ADDRESS_VERSION, TESTNET_ADDRESS_VERSION};

/// Parameters identifying one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    /// Human-readable network name
    pub name: Cow<'static, str>,
    /// Prefix byte for this network's pubkey-hash addresses
    pub address_version: u8,
}

impl NetworkProfile {
    /// The main network profile.
    pub const MAINNET: Self = Self {
        name: Cow::Borrowed("mainnet"),
        address_version: MAINNET_ADDRESS_VERSION,
    };

    /// The test network profile.
    pub const TESTNET: Self = Self {
        name: Cow::Borrowed("testnet"),
        address_version: TESTNET_ADDRESS_VERSION,
    };

    /// Create a custom profile
    pub fn new(name: impl Into<Cow<'static, str>>, address_version: u8) -> Self {
        Self {
            name: name.into(),
            address_version,
        }
    }

    /// Network name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02x})", self.name, self.address_version)
    }
}

/// The mainnet profile.
pub static MAINNET: NetworkProfile = NetworkProfile::MAINNET;
/// The testnet profile.
pub static TESTNET: NetworkProfile = NetworkProfile::TESTNET;

/// Every built-in profile.
pub static KNOWN_NETWORKS: [NetworkProfile; 2] =
    [NetworkProfile::MAINNET, NetworkProfile::TESTNET];
