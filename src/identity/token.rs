//! Public keys and public key tokens.
//!
//! A strong-named assembly carries either its full public key or the 8-byte public key token
//! derived from it. The token is the last 8 bytes of the key's hash in reverse order; SHA-1 is
//! the algorithm used by every .NET runtime, MD5 is supported for completeness.
//!
//! # Key Types
//! - [`PublicKeyToken`] - 8-byte token with byte-exact equality
//! - [`StrongName`] - Either a full public key (with its derived token) or a bare token
//! - [`HashAlgorithm`] - Digest used to derive a token from a key
//!
//! # Example
//! ```rust
//! use dotbind::identity::{PublicKeyToken, StrongName};
//!
//! // The ECMA standard "neutral" key
//! let ecma_key = hex::decode("00000000000000000400000000000000").unwrap();
//! let strong_name = StrongName::from_public_key(ecma_key);
//! assert_eq!(strong_name.token().to_string(), "b77a5c561934e089");
//! ```

use std::{fmt, str::FromStr};

use md5::{Digest, Md5};
use sha1::Sha1;
use strum::{Display, EnumString};

use crate::{Error, Result};

/// Hash algorithm used to derive a [`PublicKeyToken`] from a public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum HashAlgorithm {
    /// SHA-1, the algorithm used for all assembly public key tokens.
    #[default]
    #[strum(serialize = "SHA1")]
    Sha1,
    /// MD5.
    #[strum(serialize = "MD5")]
    Md5,
}

/// An 8-byte public key token.
///
/// Tokens are opaque: they compare byte for byte, never case-insensitively and never by prefix.
/// The textual form is 16 lowercase hex digits in byte order, e.g. `b77a5c561934e089`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicKeyToken([u8; 8]);

impl PublicKeyToken {
    /// Length of a token in bytes.
    pub const LEN: usize = 8;

    /// Create a token from its raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Create a token from a byte slice.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if the slice is not exactly 8 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let array: [u8; 8] = bytes.try_into().map_err(|_| {
            malformed_error!(
                "PublicKeyToken must be exactly 8 bytes, got {} bytes",
                bytes.len()
            )
        })?;
        Ok(Self(array))
    }

    /// Derive the token of a public key with the given hash algorithm.
    ///
    /// The token is the last 8 bytes of the digest, reversed.
    #[must_use]
    pub fn from_public_key(public_key: &[u8], algorithm: HashAlgorithm) -> Self {
        let digest: Vec<u8> = match algorithm {
            HashAlgorithm::Sha1 => Sha1::digest(public_key).to_vec(),
            HashAlgorithm::Md5 => Md5::digest(public_key).to_vec(),
        };

        let mut token = [0u8; 8];
        for (dst, src) in token.iter_mut().zip(digest.iter().rev()) {
            *dst = *src;
        }
        Self(token)
    }

    /// Parse a token from 16 hex digits (either case).
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] for invalid hex or a length other than 8 bytes.
    pub fn parse(value: &str) -> Result<Self> {
        let bytes = hex::decode(value)
            .map_err(|e| malformed_error!("Invalid hex in PublicKeyToken '{}': {}", value, e))?;
        if bytes.len() != Self::LEN {
            return Err(malformed_error!(
                "PublicKeyToken must be exactly 8 bytes (16 hex characters), got {} bytes from '{}'",
                bytes.len(),
                value
            ));
        }
        Self::from_slice(&bytes)
    }

    /// The raw token bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}

impl fmt::Display for PublicKeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PublicKeyToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<[u8]> for PublicKeyToken {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Cryptographic strong name of an assembly.
///
/// The full-key form keeps the token computed at construction, so that comparisons between a
/// key-bearing identity and a token-bearing identity never need to hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StrongName {
    /// The full public key together with its SHA-1 token.
    PublicKey {
        /// The public key blob as stored in metadata
        key: Vec<u8>,
        /// Token derived from `key`
        token: PublicKeyToken,
    },
    /// Only the 8-byte public key token.
    Token(PublicKeyToken),
}

impl StrongName {
    /// Create a strong name from a full public key, deriving its token with SHA-1.
    #[must_use]
    pub fn from_public_key(key: Vec<u8>) -> Self {
        let token = PublicKeyToken::from_public_key(&key, HashAlgorithm::Sha1);
        StrongName::PublicKey { key, token }
    }

    /// The public key token, derived or stored.
    #[must_use]
    pub fn token(&self) -> PublicKeyToken {
        match self {
            StrongName::PublicKey { token, .. } => *token,
            StrongName::Token(token) => *token,
        }
    }

    /// The full public key, if present.
    #[must_use]
    pub fn public_key(&self) -> Option<&[u8]> {
        match self {
            StrongName::PublicKey { key, .. } => Some(key),
            StrongName::Token(_) => None,
        }
    }

    /// Whether this is the full-key form.
    #[must_use]
    pub fn has_public_key(&self) -> bool {
        matches!(self, StrongName::PublicKey { .. })
    }
}

impl From<PublicKeyToken> for StrongName {
    fn from(token: PublicKeyToken) -> Self {
        StrongName::Token(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ECMA_KEY: [u8; 16] = [0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0];

    #[test]
    fn test_ecma_key_token() {
        let token = PublicKeyToken::from_public_key(&ECMA_KEY, HashAlgorithm::Sha1);
        assert_eq!(
            token,
            PublicKeyToken::new([0xb7, 0x7a, 0x5c, 0x56, 0x19, 0x34, 0xe0, 0x89])
        );
    }

    #[test]
    fn test_token_is_reversed_digest_tail() {
        let key = vec![1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];

        let digest = Sha1::digest(&key);
        let mut expected: Vec<u8> = digest[digest.len() - 8..].to_vec();
        expected.reverse();
        assert_eq!(
            PublicKeyToken::from_public_key(&key, HashAlgorithm::Sha1).as_bytes()[..],
            expected[..]
        );

        let digest = Md5::digest(&key);
        let mut expected: Vec<u8> = digest[digest.len() - 8..].to_vec();
        expected.reverse();
        assert_eq!(
            PublicKeyToken::from_public_key(&key, HashAlgorithm::Md5).as_bytes()[..],
            expected[..]
        );
    }

    #[test]
    fn test_md5_and_sha1_differ() {
        let key: Vec<u8> = (0..=255).collect();
        assert_ne!(
            PublicKeyToken::from_public_key(&key, HashAlgorithm::Sha1),
            PublicKeyToken::from_public_key(&key, HashAlgorithm::Md5)
        );
    }

    #[test]
    fn test_parse_and_display() {
        let token = PublicKeyToken::parse("B77A5C561934E089").unwrap();
        assert_eq!(token.to_string(), "b77a5c561934e089");
        assert_eq!("b77a5c561934e089".parse::<PublicKeyToken>().unwrap(), token);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(PublicKeyToken::parse("zz7a5c561934e089").is_err());
        assert!(PublicKeyToken::parse("b77a5c56").is_err());
        assert!(PublicKeyToken::parse("b77a5c561934e08900").is_err());
        assert!(PublicKeyToken::parse("").is_err());
    }

    #[test]
    fn test_from_slice_length() {
        assert!(PublicKeyToken::from_slice(&[1, 2, 3]).is_err());
        assert!(PublicKeyToken::from_slice(&[0; 8]).is_ok());
        assert!(PublicKeyToken::from_slice(&[0; 9]).is_err());
    }

    #[test]
    fn test_byte_exact_equality() {
        let a = PublicKeyToken::new([0xb7, 0x7a, 0x5c, 0x56, 0x19, 0x34, 0xe0, 0x89]);
        let b = PublicKeyToken::new([0xb7, 0x7a, 0x5c, 0x56, 0x19, 0x34, 0xe0, 0x88]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_strong_name_forms() {
        let full = StrongName::from_public_key(ECMA_KEY.to_vec());
        assert!(full.has_public_key());
        assert_eq!(full.public_key(), Some(&ECMA_KEY[..]));
        assert_eq!(full.token().to_string(), "b77a5c561934e089");

        let token_only = StrongName::from(full.token());
        assert!(!token_only.has_public_key());
        assert_eq!(token_only.public_key(), None);
        assert_eq!(token_only.token(), full.token());
    }

    #[test]
    fn test_hash_algorithm_names() {
        assert_eq!(HashAlgorithm::Sha1.to_string(), "SHA1");
        assert_eq!("md5".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Md5);
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha1);
    }
}
