//! Golden wire vectors for cross-implementation verification.
//!
//! Any reader of persisted keys depends on these exact bytes:
//! - wire_bytes (protobuf, hex)
//! - fingerprint (raw public key hex, or absent)

use mirror_keys::core::{decode_key, proto};
use mirror_keys::{encode, reencode_wire, Ed25519PublicKey, Key, KeyList, Keypair, MirrorError};
use serde::{Deserialize, Serialize};

/// A single golden vector.
#[derive(Debug, Serialize, Deserialize)]
pub struct GoldenVector {
    pub name: String,
    pub description: String,
    pub wire_bytes: String,
    pub fingerprint: Option<String>,
}

fn pk(b: u8) -> Key {
    Key::Ed25519(Ed25519PublicKey::from_bytes([b; 32]))
}

fn list(keys: Vec<Key>) -> Key {
    Key::List(KeyList::from(keys))
}

fn generate_vector(name: &str, description: &str, key: &Key) -> GoldenVector {
    let encoded = encode(key).unwrap();
    GoldenVector {
        name: name.to_string(),
        description: description.to_string(),
        wire_bytes: encoded.wire_hex(),
        fingerprint: encoded.fingerprint,
    }
}

fn key_aa() -> String {
    "aa".repeat(32)
}

fn key_bb() -> String {
    "bb".repeat(32)
}

#[test]
fn test_single_key() {
    let v = generate_vector("single", "One Ed25519 key", &pk(0xaa));
    assert_eq!(v.wire_bytes, format!("0a20{}", key_aa()));
    assert_eq!(v.fingerprint, Some(key_aa()));
}

#[test]
fn test_empty_list() {
    let v = generate_vector("empty_list", "Key list with no keys", &list(vec![]));
    assert_eq!(v.wire_bytes, "1200");
    assert_eq!(v.fingerprint, None);
}

#[test]
fn test_singleton_list() {
    let v = generate_vector("singleton", "Key list with one key", &list(vec![pk(0xaa)]));
    assert_eq!(v.wire_bytes, format!("12240a220a20{}", key_aa()));
    assert_eq!(v.fingerprint, Some(key_aa()));
}

#[test]
fn test_pair_list() {
    let v = generate_vector("pair", "Two keys", &list(vec![pk(0xaa), pk(0xbb)]));
    assert_eq!(
        v.wire_bytes,
        format!("12480a220a20{}0a220a20{}", key_aa(), key_bb())
    );
    assert_eq!(v.fingerprint, None);

    let swapped = generate_vector("pair_swapped", "Two keys, reversed", &list(vec![pk(0xbb), pk(0xaa)]));
    assert_eq!(
        swapped.wire_bytes,
        format!("12480a220a20{}0a220a20{}", key_bb(), key_aa())
    );
}

#[test]
fn test_nested_singleton() {
    let v = generate_vector(
        "nested_singleton",
        "List holding a list holding one key",
        &list(vec![list(vec![pk(0xaa)])]),
    );
    assert_eq!(v.wire_bytes, format!("12280a2612240a220a20{}", key_aa()));
    assert_eq!(v.fingerprint, Some(key_aa()));
}

#[test]
fn test_mixed_list() {
    let v = generate_vector(
        "mixed",
        "A key followed by an empty list",
        &list(vec![pk(0xaa), list(vec![])]),
    );
    assert_eq!(v.wire_bytes, format!("12280a220a20{}0a021200", key_aa()));
    assert_eq!(v.fingerprint, None);
}

#[test]
fn test_derived_public_key() {
    let public_key = Keypair::from_seed(&[0x42; 32]).public_key();
    let encoded = encode(&Key::Ed25519(public_key)).unwrap();

    assert_eq!(encoded.fingerprint, Some(public_key.to_hex()));
    assert_eq!(encoded.wire_hex(), format!("0a20{}", public_key.to_hex()));
}

#[test]
fn test_vectors_decode_back() {
    let keys = vec![
        pk(0x01),
        list(vec![]),
        list(vec![pk(0x01), pk(0x02), pk(0x03)]),
        list(vec![list(vec![pk(0x04)]), pk(0x05)]),
    ];

    for key in keys {
        let encoded = encode(&key).unwrap();
        assert_eq!(decode_key(&encoded.wire_bytes).unwrap(), key);
        assert_eq!(reencode_wire(&encoded.wire_bytes).unwrap(), encoded);
    }
}

#[test]
fn test_reject_message_without_key() {
    let empty = proto::Key::default();
    let bytes = mirror_keys::core::wire_bytes(&empty);
    assert!(matches!(
        reencode_wire(&bytes),
        Err(MirrorError::UnsupportedKeyType(_))
    ));
}

#[test]
fn test_reject_nested_message_without_key() {
    let nested = proto::Key::key_list(vec![proto::Key::ed25519(vec![0x01; 32]), proto::Key::default()]);
    let bytes = mirror_keys::core::wire_bytes(&nested);
    assert!(matches!(
        reencode_wire(&bytes),
        Err(MirrorError::UnsupportedKeyType(_))
    ));
}

#[test]
fn print_golden_vectors_json() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let vectors = vec![
        generate_vector("single", "One Ed25519 key", &pk(0xaa)),
        generate_vector("empty_list", "Key list with no keys", &list(vec![])),
        generate_vector("singleton", "Key list with one key", &list(vec![pk(0xaa)])),
        generate_vector("pair", "Two keys", &list(vec![pk(0xaa), pk(0xbb)])),
    ];

    let json = serde_json::to_string_pretty(&vectors).unwrap();
    let parsed: Vec<GoldenVector> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), vectors.len());
    println!("{}", json);
}
