//! Address errors

use std::fmt;
use thiserror::Error;

use crate::crypto::Base58CheckError;

/// Address construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Invalid hash length: expected 20 bytes, got {len}")]
    InvalidHashLength { len: usize },
    #[error(transparent)]
    Decode(#[from] Base58CheckError),
    #[error("Invalid address payload length: expected 21 bytes, got {len}")]
    InvalidPayloadLength { len: usize },
    #[error("Unknown network version byte 0x{0:02x}")]
    UnknownNetworkVersion(u8),
}

/// Failure classification reported to event sinks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidHashLength,
    InvalidCharacter,
    TooShort,
    ChecksumMismatch,
    Malformed,
    InvalidPayloadLength,
    UnknownNetworkVersion,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidHashLength => "invalid hash length",
            ErrorKind::InvalidCharacter => "invalid character",
            ErrorKind::TooShort => "too short",
            ErrorKind::ChecksumMismatch => "checksum mismatch",
            ErrorKind::Malformed => "malformed encoding",
            ErrorKind::InvalidPayloadLength => "invalid payload length",
            ErrorKind::UnknownNetworkVersion => "unknown network version",
        };
        f.write_str(name)
    }
}

impl AddressError {
    /// Classification used for event reporting
    pub fn kind(&self) -> ErrorKind {
        match self {
            AddressError::InvalidHashLength { .. } => ErrorKind::InvalidHashLength,
            AddressError::Decode(Base58CheckError::ChecksumMismatch { .. }) => {
                ErrorKind::ChecksumMismatch
            }
            AddressError::Decode(Base58CheckError::TooShort { .. }) => ErrorKind::TooShort,
            AddressError::Decode(Base58CheckError::InvalidCharacter { .. }) => {
                ErrorKind::InvalidCharacter
            }
            AddressError::Decode(Base58CheckError::Malformed(_)) => ErrorKind::Malformed,
            AddressError::InvalidPayloadLength { .. } => ErrorKind::InvalidPayloadLength,
            AddressError::UnknownNetworkVersion(_) => ErrorKind::UnknownNetworkVersion,
        }
    }

    /// Message suitable for showing to an end user
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::UnknownNetworkVersion => "address not valid for this network",
            ErrorKind::InvalidHashLength => "invalid public key hash",
            _ => "malformed address",
        }
    }
}
