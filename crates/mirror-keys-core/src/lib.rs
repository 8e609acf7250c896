//! # Mirror Keys Core
//!
//! Pure primitives for mirrored key material: Ed25519 public keys, key lists,
//! and their protobuf wire schema.
//!
//! This crate contains no I/O. It is pure computation over key data.
//!
//! ## Key Types
//!
//! - [`Key`] - A single public key or an ordered list of keys
//! - [`KeyList`] - Ordered, recursive collection of keys
//! - [`Ed25519PublicKey`] - Raw 32-byte public key with a hex text form
//!
//! ## Wire format
//!
//! Keys are serialized as protobuf messages. See the [`proto`] and
//! [`canonical`] modules.

pub mod canonical;
pub mod crypto;
pub mod error;
pub mod key;
pub mod proto;

pub use canonical::{decode_key, decode_message, wire_bytes};
pub use crypto::{Ed25519PublicKey, Keypair, ED25519_DER_PREFIX_HEX};
pub use error::CoreError;
pub use key::{Key, KeyList};
