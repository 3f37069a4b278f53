//! Version-byte lookup across known networks

use serde::Deserialize;
use thiserror::Error;

use super::{NetworkProfile, KNOWN_NETWORKS};

/// Registry configuration errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid registry config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Version byte 0x{version:02x} used by both {first} and {second}")]
    DuplicateVersion {
        version: u8,
        first: String,
        second: String,
    },
}

/// Finds the profile an address version byte belongs to
pub trait ProfileResolver {
    /// All profiles this resolver knows
    fn profiles(&self) -> &[NetworkProfile];

    /// Profile whose `address_version` equals `version`
    fn by_version(&self, version: u8) -> Option<&NetworkProfile> {
        self.profiles().iter().find(|p| p.address_version == version)
    }
}

impl ProfileResolver for [NetworkProfile] {
    fn profiles(&self) -> &[NetworkProfile] {
        self
    }
}

impl<const N: usize> ProfileResolver for [NetworkProfile; N] {
    fn profiles(&self) -> &[NetworkProfile] {
        self
    }
}

impl ProfileResolver for NetworkProfile {
    fn profiles(&self) -> &[NetworkProfile] {
        std::slice::from_ref(self)
    }
}

/// Owned set of profiles with unique version bytes
#[derive(Debug, Clone, Default)]
pub struct NetworkRegistry {
    profiles: Vec<NetworkProfile>,
}

#[derive(Deserialize)]
struct RegistryConfig {
    networks: Vec<NetworkProfile>,
}

impl NetworkRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in mainnet and testnet profiles
    pub fn builtin() -> Self {
        Self {
            profiles: KNOWN_NETWORKS.to_vec(),
        }
    }

    /// Add a profile, rejecting a version byte that is already taken
    pub fn with_profile(mut self, profile: NetworkProfile) -> Result<Self, RegistryError> {
        self.insert(profile)?;
        Ok(self)
    }

    /// Add a profile in place
    pub fn insert(&mut self, profile: NetworkProfile) -> Result<(), RegistryError> {
        if let Some(existing) = self.by_version(profile.address_version) {
            return Err(RegistryError::DuplicateVersion {
                version: profile.address_version,
                first: existing.name().to_string(),
                second: profile.name().to_string(),
            });
        }
        self.profiles.push(profile);
        Ok(())
    }

    /// Load from JSON: `{"networks": [{"name": "...", "address_version": 0}]}`
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let config: RegistryConfig = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for profile in config.networks {
            registry.insert(profile)?;
        }
        Ok(registry)
    }

    /// Number of profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True if no profiles are registered
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileResolver for NetworkRegistry {
    fn profiles(&self) -> &[NetworkProfile] {
        &self.profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{MAINNET, TESTNET};

    #[test]
    fn test_builtin_lookup() {
        let registry = NetworkRegistry::builtin();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.by_version(0x00), Some(&MAINNET));
        assert_eq!(registry.by_version(0x6f), Some(&TESTNET));
        assert_eq!(registry.by_version(0x05), None);
    }

    #[test]
    fn test_slice_and_single_resolvers() {
        assert_eq!(KNOWN_NETWORKS.by_version(0x6f), Some(&TESTNET));
        assert_eq!(MAINNET.by_version(0x00), Some(&MAINNET));
        assert_eq!(MAINNET.by_version(0x6f), None);
    }

    #[test]
    fn test_duplicate_version_rejected() {
        let result = NetworkRegistry::builtin().with_profile(NetworkProfile::new("regtest", 0x6f));
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateVersion { version: 0x6f, .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let registry = NetworkRegistry::from_json(
            r#"{"networks": [
                {"name": "mainnet", "address_version": 0},
                {"name": "litecoin", "address_version": 48}
            ]}"#,
        )
        .unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.by_version(48).map(|p| p.name()), Some("litecoin"));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            NetworkRegistry::from_json("{not json"),
            Err(RegistryError::Parse(_))
        ));
        assert!(matches!(
            NetworkRegistry::from_json(
                r#"{"networks": [
                    {"name": "a", "address_version": 1},
                    {"name": "b", "address_version": 1}
                ]}"#
            ),
            Err(RegistryError::DuplicateVersion { version: 1, .. })
        ));
    }

    #[test]
    fn test_empty_registry() {
        let registry = NetworkRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.by_version(0), None);
    }
}
