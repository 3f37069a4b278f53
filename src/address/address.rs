//! Pubkey-hash address
//!
//! An address is a 20-byte hash plus the network it was built for. Its text
//! form is `Base58Check(version || hash)`. The rendered string may be
//! memoized; the cache never disagrees with the hash and network it holds.
//!
//! Only the hash length is checked on construction, not how the hash was
//! produced. Callers are trusted to pass a real HASH160.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use super::{AddressError, Dependencies};
use crate::constants::{HASH_LENGTH, PAYLOAD_LENGTH};
use crate::crypto::{base58check, hash160, Encodable, Hash160};
use crate::network::{NetworkProfile, ProfileResolver, KNOWN_NETWORKS};

/// Something that can be rebuilt from a checksum-verified payload
pub trait Decodable<'a>: Sized {
    /// Rebuild from `version || hash`, resolving the version through `resolver`
    fn from_payload<R>(
        payload: &[u8],
        resolver: &'a R,
        deps: Dependencies,
    ) -> Result<Self, AddressError>
    where
        R: ProfileResolver + ?Sized;
}

/// A network-versioned public key hash
#[derive(Clone)]
pub struct Address<'a> {
    network: &'a NetworkProfile,
    hash: Hash160,
    cache_string: bool,
    cached: OnceLock<String>,
    deps: Dependencies,
}

impl<'a> Address<'a> {
    /// Build from a typed hash. Infallible since the length is fixed.
    pub fn new(network: &'a NetworkProfile, hash: Hash160, cache_string: bool) -> Self {
        Self::with_deps(network, hash, cache_string, Dependencies::default())
    }

    /// Build from a typed hash with injected collaborators
    pub fn with_deps(
        network: &'a NetworkProfile,
        hash: Hash160,
        cache_string: bool,
        deps: Dependencies,
    ) -> Self {
        let address = Self {
            network,
            hash,
            cache_string,
            cached: OnceLock::new(),
            deps,
        };
        if cache_string {
            address.render();
        }
        address
    }

    /// Build from a raw RIPEMD-160 hash, which must be exactly 20 bytes
    pub fn from_hash160(
        network: &'a NetworkProfile,
        hash: &[u8],
        cache_string: bool,
    ) -> Result<Self, AddressError> {
        Self::from_hash160_with(network, hash, cache_string, Dependencies::default())
    }

    /// Like `from_hash160`, reporting failures to the injected event sink
    pub fn from_hash160_with(
        network: &'a NetworkProfile,
        hash: &[u8],
        cache_string: bool,
        deps: Dependencies,
    ) -> Result<Self, AddressError> {
        let Some(hash) = Hash160::from_slice(hash) else {
            let err = AddressError::InvalidHashLength { len: hash.len() };
            deps.report(err.kind(), &format!("{} byte hash for {}", hash.len(), network));
            return Err(err);
        };
        Ok(Self::with_deps(network, hash, cache_string, deps))
    }

    /// Build from a serialized public key by hashing it with HASH160
    pub fn from_public_key(
        network: &'a NetworkProfile,
        public_key: &[u8],
        cache_string: bool,
    ) -> Self {
        Self::new(network, hash160(public_key), cache_string)
    }

    /// Parse an address string, resolving its version byte through `resolver`
    pub fn from_string<R>(
        text: &str,
        cache_string: bool,
        resolver: &'a R,
    ) -> Result<Self, AddressError>
    where
        R: ProfileResolver + ?Sized,
    {
        Self::from_string_with(text, cache_string, resolver, Dependencies::default())
    }

    /// Like `from_string`, with an injected hasher and event sink
    pub fn from_string_with<R>(
        text: &str,
        cache_string: bool,
        resolver: &'a R,
        deps: Dependencies,
    ) -> Result<Self, AddressError>
    where
        R: ProfileResolver + ?Sized,
    {
        let result = base58check::decode_with(deps.hasher.as_ref(), text)
            .map_err(AddressError::from)
            .and_then(|payload| Self::from_payload(&payload, resolver, deps.clone()));

        match result {
            Ok(mut address) => {
                if cache_string {
                    address.cache_string = true;
                    // Keep the caller's exact text
                    let _ = address.cached.set(text.to_string());
                }
                Ok(address)
            }
            Err(err) => {
                deps.report(err.kind(), text);
                Err(err)
            }
        }
    }

    /// Text form. Memoized when caching was requested.
    pub fn render(&self) -> String {
        if let Some(cached) = self.cached.get() {
            return cached.clone();
        }
        if self.cache_string {
            self.cached.get_or_init(|| self.encode()).clone()
        } else {
            self.encode()
        }
    }

    fn encode(&self) -> String {
        self.to_base58check_with(self.deps.hasher.as_ref())
    }

    /// The 20-byte hash
    pub fn hash(&self) -> &Hash160 {
        &self.hash
    }

    /// Network this address belongs to
    pub fn network(&self) -> &'a NetworkProfile {
        self.network
    }

    /// Version byte prefixed to the hash
    pub fn version(&self) -> u8 {
        self.network.address_version
    }

    /// Whether the rendered string is currently memoized
    pub fn is_cached(&self) -> bool {
        self.cached.get().is_some()
    }
}

impl Encodable for Address<'_> {
    fn payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(PAYLOAD_LENGTH);
        payload.push(self.version());
        payload.extend_from_slice(self.hash.as_bytes());
        payload
    }
}

impl<'a> Decodable<'a> for Address<'a> {
    fn from_payload<R>(
        payload: &[u8],
        resolver: &'a R,
        deps: Dependencies,
    ) -> Result<Self, AddressError>
    where
        R: ProfileResolver + ?Sized,
    {
        if payload.len() != PAYLOAD_LENGTH {
            return Err(AddressError::InvalidPayloadLength { len: payload.len() });
        }
        let version = payload[0];
        let network = resolver
            .by_version(version)
            .ok_or(AddressError::UnknownNetworkVersion(version))?;

        let mut hash = [0u8; HASH_LENGTH];
        hash.copy_from_slice(&payload[1..]);

        Ok(Self {
            network,
            hash: Hash160(hash),
            cache_string: false,
            cached: OnceLock::new(),
            deps,
        })
    }
}

impl PartialEq for Address<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.version() == other.version() && self.hash == other.hash
    }
}

impl Eq for Address<'_> {}

impl Hash for Address<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version().hash(state);
        self.hash.hash(state);
    }
}

impl fmt::Debug for Address<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Address")
            .field("network", &self.network.name())
            .field("hash", &self.hash)
            .field("cached", &self.is_cached())
            .finish()
    }
}

impl fmt::Display for Address<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Parses against the built-in networks
impl FromStr for Address<'static> {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_string(s, false, &KNOWN_NETWORKS)
    }
}

impl Serialize for Address<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

impl<'de> Deserialize<'de> for Address<'static> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
