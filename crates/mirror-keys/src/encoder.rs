//! Key encoder: canonical wire bytes plus a textual fingerprint.
//!
//! A single key encodes as `{ed25519: bytes}` and is fingerprinted by its
//! hex form. A key list encodes as `{keyList: {keys: [...]}}` with children
//! in their given order. A list of exactly one key takes that key's
//! fingerprint (through any number of singleton wrappers); any other list
//! has none.

use bytes::Bytes;
use mirror_keys_core::{canonical, proto, Key};

use crate::error::{MirrorError, Result};

/// The persisted form of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedKey {
    /// Canonical protobuf bytes of the key.
    pub wire_bytes: Bytes,
    /// Hex of the single underlying public key, if there is exactly one.
    pub fingerprint: Option<String>,
}

impl EncodedKey {
    /// Wire bytes as lowercase hex.
    pub fn wire_hex(&self) -> String {
        hex::encode(&self.wire_bytes)
    }
}

/// Encode a key into its wire bytes and fingerprint.
pub fn encode(key: &Key) -> Result<EncodedKey> {
    let message = to_proto(key)?;
    let fingerprint = fingerprint(key)?;
    let wire_bytes = canonical::wire_bytes(&message);

    tracing::debug!(
        len = wire_bytes.len(),
        fingerprint = fingerprint.as_deref().unwrap_or("-"),
        "encoded key"
    );

    Ok(EncodedKey {
        wire_bytes,
        fingerprint,
    })
}

/// Build the wire message for a key without serializing it.
///
/// List children are converted recursively and keep their order.
pub fn to_proto(key: &Key) -> Result<proto::Key> {
    match key {
        Key::Ed25519(pk) => Ok(proto::Key::ed25519(pk.as_bytes().to_vec())),
        Key::List(list) => {
            let keys = list.iter().map(to_proto).collect::<Result<Vec<_>>>()?;
            Ok(proto::Key::key_list(keys))
        }
        other => Err(unsupported(other)),
    }
}

/// Derive the fingerprint of a key, if it has one.
pub fn fingerprint(key: &Key) -> Result<Option<String>> {
    match key {
        Key::Ed25519(pk) => Ok(Some(pk.to_hex())),
        Key::List(list) => match list.as_slice() {
            [only] => fingerprint(only),
            _ => Ok(None),
        },
        other => Err(unsupported(other)),
    }
}

/// Decode previously stored wire bytes and encode them again.
///
/// Yields the canonical bytes together with the fingerprint the stored
/// bytes alone do not carry.
pub fn reencode_wire(bytes: &[u8]) -> Result<EncodedKey> {
    let key = canonical::decode_key(bytes)?;
    encode(&key)
}

fn unsupported(key: &Key) -> MirrorError {
    MirrorError::UnsupportedKeyType(format!("{:?}", key))
}
