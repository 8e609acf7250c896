//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the persisted byte layout of encoded keys. Readers in
//! other languages check their decoders against the same hex.

use mirror_keys::encode;
use mirror_keys_core::{Ed25519PublicKey, Key, KeyList};
use serde::Serialize;

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The key to encode.
    pub key: Key,
    /// Expected wire bytes (hex).
    pub expected_wire_hex: String,
    /// Expected fingerprint.
    pub expected_fingerprint: Option<String>,
}

/// Serializable outcome of checking one vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VectorResult {
    pub name: String,
    pub matches: bool,
    pub wire_hex: String,
    pub fingerprint: Option<String>,
}

fn simple(b: u8) -> Key {
    Key::Ed25519(Ed25519PublicKey::from_bytes([b; 32]))
}

fn list(keys: Vec<Key>) -> Key {
    Key::List(KeyList::from(keys))
}

fn raw(b: u8) -> String {
    hex::encode([b; 32])
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "single key",
            key: simple(0x11),
            expected_wire_hex: format!("0a20{}", raw(0x11)),
            expected_fingerprint: Some(raw(0x11)),
        },
        GoldenVector {
            name: "empty list",
            key: list(vec![]),
            expected_wire_hex: "1200".to_string(),
            expected_fingerprint: None,
        },
        GoldenVector {
            name: "singleton list",
            key: list(vec![simple(0x11)]),
            expected_wire_hex: format!("12240a220a20{}", raw(0x11)),
            expected_fingerprint: Some(raw(0x11)),
        },
        GoldenVector {
            name: "doubly wrapped singleton",
            key: list(vec![list(vec![simple(0x22)])]),
            expected_wire_hex: format!("12280a2612240a220a20{}", raw(0x22)),
            expected_fingerprint: Some(raw(0x22)),
        },
        GoldenVector {
            name: "two keys",
            key: list(vec![simple(0x11), simple(0x22)]),
            expected_wire_hex: format!("12480a220a20{}0a220a20{}", raw(0x11), raw(0x22)),
            expected_fingerprint: None,
        },
        GoldenVector {
            name: "singleton wrapping empty list",
            key: list(vec![list(vec![])]),
            expected_wire_hex: "12040a021200".to_string(),
            expected_fingerprint: None,
        },
    ]
}

/// Check every vector against the encoder.
pub fn verify_all_vectors() -> Vec<VectorResult> {
    all_vectors()
        .iter()
        .map(|v| match encode(&v.key) {
            Ok(encoded) => {
                let wire_hex = encoded.wire_hex();
                VectorResult {
                    name: v.name.to_string(),
                    matches: wire_hex == v.expected_wire_hex
                        && encoded.fingerprint == v.expected_fingerprint,
                    wire_hex,
                    fingerprint: encoded.fingerprint,
                }
            }
            Err(_) => VectorResult {
                name: v.name.to_string(),
                matches: false,
                wire_hex: String::new(),
                fingerprint: None,
            },
        })
        .collect()
}

/// Render the verification results as pretty JSON.
pub fn vectors_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&verify_all_vectors())
}
