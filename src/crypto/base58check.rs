//! Base58Check encoding
//!
//! `payload || first4(SHA256(SHA256(payload)))`, rendered with the Bitcoin
//! Base58 alphabet. Every leading zero byte becomes a leading `'1'` and back.
//! Nothing here knows about addresses or version bytes.

use thiserror::Error;

use super::{Sha256Backend, Sha256Provider};
use crate::constants::CHECKSUM_LENGTH;

/// Base58Check decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base58CheckError {
    #[error("Invalid base58 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },
    #[error("Decoded data too short for a checksum: {len} bytes")]
    TooShort { len: usize },
    #[error("Checksum mismatch: expected {expected:02x?}, found {actual:02x?}")]
    ChecksumMismatch {
        expected: [u8; CHECKSUM_LENGTH],
        actual: [u8; CHECKSUM_LENGTH],
    },
    #[error("Malformed base58: {0}")]
    Malformed(String),
}

/// Something that can produce the raw payload to be checksummed and encoded
pub trait Encodable {
    /// Bytes placed in front of the checksum
    fn payload(&self) -> Vec<u8>;

    /// Base58Check text form using the given SHA-256 backend
    fn to_base58check_with(&self, hasher: &dyn Sha256Provider) -> String {
        encode_with(hasher, &self.payload())
    }
}

/// First four bytes of the double SHA-256 of `payload`
pub fn checksum(hasher: &dyn Sha256Provider, payload: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let digest = hasher.double_sha256(payload);
    let mut out = [0u8; CHECKSUM_LENGTH];
    out.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
    out
}

/// Encode with the default SHA-256 backend
pub fn encode(payload: &[u8]) -> String {
    encode_with(&Sha256Backend, payload)
}

/// Append the checksum and Base58-encode. Never fails.
pub fn encode_with(hasher: &dyn Sha256Provider, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LENGTH);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(hasher, payload));
    bs58::encode(data)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

/// Decode with the default SHA-256 backend
pub fn decode(text: &str) -> Result<Vec<u8>, Base58CheckError> {
    decode_with(&Sha256Backend, text)
}

/// Base58-decode, verify and strip the checksum, return the payload.
///
/// The payload still carries whatever prefix the caller encoded with it.
pub fn decode_with(hasher: &dyn Sha256Provider, text: &str) -> Result<Vec<u8>, Base58CheckError> {
    let mut data = bs58::decode(text)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| map_decode_error(text, e))?;

    if data.len() < CHECKSUM_LENGTH {
        return Err(Base58CheckError::TooShort { len: data.len() });
    }

    let split = data.len() - CHECKSUM_LENGTH;
    let mut actual = [0u8; CHECKSUM_LENGTH];
    actual.copy_from_slice(&data[split..]);
    data.truncate(split);

    let expected = checksum(hasher, &data);
    if expected != actual {
        return Err(Base58CheckError::ChecksumMismatch { expected, actual });
    }

    Ok(data)
}

fn map_decode_error(text: &str, err: bs58::decode::Error) -> Base58CheckError {
    match err {
        bs58::decode::Error::InvalidCharacter { character, index } => {
            Base58CheckError::InvalidCharacter { character, index }
        }
        bs58::decode::Error::NonAsciiCharacter { index } => Base58CheckError::InvalidCharacter {
            character: text
                .get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            index,
        },
        other => Base58CheckError::Malformed(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ZeroHasher;

    impl Sha256Provider for ZeroHasher {
        fn sha256(&self, _data: &[u8]) -> [u8; 32] {
            [0u8; 32]
        }
    }

    #[test]
    fn test_all_zero_payload() {
        assert_eq!(encode(&[0u8; 21]), "1111111111111111111114oLvT2");
        assert_eq!(decode("1111111111111111111114oLvT2").unwrap(), vec![0u8; 21]);
    }

    #[test]
    fn test_leading_zeros_preserved() {
        let encoded = encode(&[0, 0, 0, 7, 42]);
        assert!(encoded.starts_with("111"));
        assert_ne!(encoded.as_bytes()[3], b'1');
        assert_eq!(decode(&encoded).unwrap(), vec![0, 0, 0, 7, 42]);
    }

    #[test]
    fn test_rejects_characters_outside_alphabet() {
        for bad in ['0', 'O', 'I', 'l'] {
            let text = format!("1111111111{}11111111114oLvT2", bad);
            assert_eq!(
                decode(&text),
                Err(Base58CheckError::InvalidCharacter { character: bad, index: 10 })
            );
        }
    }

    #[test]
    fn test_rejects_non_ascii() {
        let err = decode("11é1").unwrap_err();
        assert!(matches!(err, Base58CheckError::InvalidCharacter { index: 2, .. }));
    }

    #[test]
    fn test_too_short() {
        assert_eq!(decode(""), Err(Base58CheckError::TooShort { len: 0 }));
        assert_eq!(decode("111"), Err(Base58CheckError::TooShort { len: 3 }));
    }

    #[test]
    fn test_checksum_edit_detected() {
        // Last digit carries checksum bytes only
        let err = decode("1111111111111111111114oLvT3").unwrap_err();
        assert!(matches!(err, Base58CheckError::ChecksumMismatch { .. }));
    }

    #[test]
    fn test_injected_hasher() {
        let encoded = encode_with(&ZeroHasher, &[1]);
        assert_eq!(encoded, bs58::encode([1, 0, 0, 0, 0]).into_string());
        assert_eq!(decode_with(&ZeroHasher, &encoded).unwrap(), vec![1]);
        assert!(matches!(
            decode(&encoded),
            Err(Base58CheckError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_payload_encodes_checksum_only() {
        let encoded = encode(&[]);
        assert_eq!(decode(&encoded).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_encodable_default_method() {
        struct Raw(Vec<u8>);
        impl Encodable for Raw {
            fn payload(&self) -> Vec<u8> {
                self.0.clone()
            }
        }
        let raw = Raw(vec![0, 1, 2, 3]);
        assert_eq!(raw.to_base58check_with(&Sha256Backend), encode(&[0, 1, 2, 3]));
    }
}
