//! Cryptography module - SHA-256 backends, HASH160, Base58Check

mod hash;
pub mod base58check;

pub use hash::*;
pub use base58check::{Base58CheckError, Encodable};
