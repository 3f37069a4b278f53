//! Versioned Base58Check address codec
//!
//! Turns 20-byte public-key hashes into human-copyable address strings and
//! back, with a network version byte and a double SHA-256 checksum.
//!
//! The text format is bit-exact with the Base58Check scheme used by Bitcoin
//! pubkey-hash addresses.

pub mod crypto;
pub mod network;
pub mod address;

pub use address::{Address, AddressError, Dependencies, ErrorKind};
pub use network::{NetworkProfile, NetworkRegistry, ProfileResolver, MAINNET, TESTNET};

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Length of a RIPEMD-160 digest (the hash an address wraps)
    pub const HASH_LENGTH: usize = 20;

    /// Length of the version prefix
    pub const VERSION_LENGTH: usize = 1;

    /// Length of the checksum appended before Base58 encoding
    pub const CHECKSUM_LENGTH: usize = 4;

    /// Decoded address payload: version byte + hash
    pub const PAYLOAD_LENGTH: usize = VERSION_LENGTH + HASH_LENGTH;

    /// Full binary address before text encoding
    pub const ENCODED_LENGTH: usize = PAYLOAD_LENGTH + CHECKSUM_LENGTH;

    /// Main network pubkey-hash version byte
    pub const MAINNET_ADDRESS_VERSION: u8 = 0x00;

    /// Test network pubkey-hash version byte
    pub const TESTNET_ADDRESS_VERSION: u8 = 0x6f;
}
