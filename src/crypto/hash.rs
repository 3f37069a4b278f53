//! Hash primitives consumed by the address codec
//!
//! SHA-256 is reached through the `Sha256Provider` trait so callers can swap
//! the backend. HASH160 (RIPEMD-160 of SHA-256) is what an address wraps.

use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::constants::HASH_LENGTH;

/// SHA-256 implementation used for checksums
pub trait Sha256Provider: Send + Sync {
    /// Single SHA-256 digest
    fn sha256(&self, data: &[u8]) -> [u8; 32];

    /// SHA-256 applied twice
    fn double_sha256(&self, data: &[u8]) -> [u8; 32] {
        let first = self.sha256(data);
        self.sha256(&first)
    }
}

/// Default backend on top of the `sha2` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Backend;

impl Sha256Provider for Sha256Backend {
    fn sha256(&self, data: &[u8]) -> [u8; 32] {
        Sha256::digest(data).into()
    }
}

/// 20-byte public key hash
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hash160(pub [u8; HASH_LENGTH]);

impl Hash160 {
    /// All-zero hash
    pub const fn zero() -> Self {
        Hash160([0u8; HASH_LENGTH])
    }

    /// Create hash from a slice, `None` unless it is exactly 20 bytes
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let arr: [u8; HASH_LENGTH] = bytes.try_into().ok()?;
        Some(Hash160(arr))
    }

    /// Create hash from hex string
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(hex)?;
        Self::from_slice(&bytes).ok_or(hex::FromHexError::InvalidStringLength)
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; HASH_LENGTH] {
        &self.0
    }
}

impl fmt::Debug for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash160({})", self.to_hex())
    }
}

impl fmt::Display for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash160 {
    fn default() -> Self {
        Self::zero()
    }
}

/// RIPEMD-160 of SHA-256, the digest of a serialized public key
pub fn hash160(data: &[u8]) -> Hash160 {
    let sha = Sha256::digest(data);
    Hash160(Ripemd160::digest(sha).into())
}
