//! Proptest generators for property-based testing.

use proptest::prelude::*;

use mirror_keys_core::{Ed25519PublicKey, Key, KeyList, Keypair};

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate a public key from arbitrary raw bytes.
pub fn raw_public_key() -> impl Strategy<Value = Ed25519PublicKey> {
    any::<[u8; 32]>().prop_map(Ed25519PublicKey::from_bytes)
}

/// Generate a public key derived from a real keypair.
pub fn public_key() -> impl Strategy<Value = Ed25519PublicKey> {
    keypair().prop_map(|kp| kp.public_key())
}

/// Generate a key tree up to `depth` list levels, each list holding at most
/// `max_width` children.
pub fn key(depth: u32, max_width: usize) -> impl Strategy<Value = Key> {
    raw_public_key()
        .prop_map(Key::Ed25519)
        .prop_recursive(depth, 64, max_width as u32, move |inner| {
            prop::collection::vec(inner, 0..=max_width)
                .prop_map(|keys| Key::List(KeyList::from(keys)))
        })
}

/// Generate a key list of `min..=max` children.
pub fn key_list(min: usize, max: usize) -> impl Strategy<Value = KeyList> {
    prop::collection::vec(key(2, 3), min..=max).prop_map(KeyList::from)
}

/// Wrap a key in `levels` singleton lists.
pub fn wrap_in_singletons(key: Key, levels: usize) -> Key {
    (0..levels).fold(key, |inner, _| Key::List(KeyList::new().with(inner)))
}
