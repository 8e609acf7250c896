//! Cryptographic primitives for mirror key material.
//!
//! Wraps Ed25519 public keys and keypairs with strong types.

use ed25519_dalek::SigningKey;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Hex form of the DER SubjectPublicKeyInfo header that precedes a raw
/// Ed25519 public key (`SEQUENCE { SEQUENCE { OID 1.3.101.112 } BIT STRING }`).
pub const ED25519_DER_PREFIX_HEX: &str = "302a300506032b6570032100";

/// Length of a raw Ed25519 public key in bytes.
pub const ED25519_PUBLIC_KEY_LEN: usize = 32;

/// A 32-byte Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ed25519PublicKey(pub [u8; 32]);

impl Ed25519PublicKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to lowercase hex string of the raw bytes.
    ///
    /// This is the canonical textual form used as a key fingerprint.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Convert to hex string with the DER prefix.
    pub fn to_der_hex(&self) -> String {
        format!("{}{}", ED25519_DER_PREFIX_HEX, self.to_hex())
    }

    /// Parse from a raw hex string (exactly 32 bytes).
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let bytes = hex::decode(s)?;
        Self::try_from(bytes.as_slice())
    }
}

impl FromStr for Ed25519PublicKey {
    type Err = CoreError;

    /// Accepts either raw hex or DER-prefixed hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let raw = match s.len() {
            64 => s,
            88 if s
                .get(..24)
                .is_some_and(|p| p.eq_ignore_ascii_case(ED25519_DER_PREFIX_HEX)) =>
            {
                &s[24..]
            }
            n => {
                return Err(CoreError::InvalidPublicKey(format!(
                    "expected 64 or 88 hex characters, got {}",
                    n
                )))
            }
        };
        Self::from_hex(raw)
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Pub({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Ed25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Ed25519PublicKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Ed25519PublicKey {
    type Error = CoreError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 32] = slice.try_into().map_err(|_| {
            CoreError::InvalidPublicKey(format!(
                "expected {} bytes, got {}",
                ED25519_PUBLIC_KEY_LEN,
                slice.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

/// An Ed25519 keypair.
///
/// This wraps ed25519-dalek's SigningKey. Only the public half ever enters
/// the wire encoding.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let signing_key = SigningKey::generate(&mut rng);
        Self { signing_key }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Get the public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.signing_key.verifying_key().to_bytes())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({:?})", self.public_key())
    }
}
