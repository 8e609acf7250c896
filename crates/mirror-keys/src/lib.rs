//! # Mirror Keys
//!
//! Utilities for mirrored ledger data, centred on re-encoding key material
//! into its canonical persisted form.
//!
//! ## Overview
//!
//! - **Encoder**: turns a [`Key`] into protobuf wire bytes plus an optional
//!   hex fingerprint
//! - **Entity loader**: reads an entity CSV and encodes each entity's key
//! - **Crypto transfer model**: typed view of a `crypto_transfer` row
//! - **Time**: seconds/nanoseconds conversion
//!
//! ## Usage
//!
//! ```rust
//! use mirror_keys::{encode, Ed25519PublicKey, Key, KeyList};
//!
//! let pk = Ed25519PublicKey::from_bytes([0x11; 32]);
//! let single = encode(&Key::Ed25519(pk)).unwrap();
//! assert_eq!(single.fingerprint, Some("11".repeat(32)));
//!
//! // A list of one key is fingerprinted by that key
//! let wrapped = encode(&Key::List(KeyList::new().with(pk))).unwrap();
//! assert_eq!(wrapped.fingerprint, single.fingerprint);
//! assert_ne!(wrapped.wire_bytes, single.wire_bytes);
//! ```
//!
//! ## Re-exports
//!
//! - `mirror_keys::core` - Key types and wire schema

pub mod encoder;
pub mod entity;
pub mod error;
pub mod loader;
pub mod time;
pub mod transfer;

pub use mirror_keys_core as core;

pub use encoder::{encode, fingerprint, reencode_wire, to_proto, EncodedKey};
pub use entity::{parse_entity_csv, read_entity_csv, Entity};
pub use error::{MirrorError, Result};
pub use loader::{
    encode_entity_keys, load_entity_keys, EntityKeyRecord, LoadReport, LoaderConfig,
    RejectedRecord,
};
pub use time::{elapsed_time_string, sec_ns_to_ns};
pub use transfer::{CryptoTransfer, Model};

pub use mirror_keys_core::{Ed25519PublicKey, Key, KeyList, Keypair};
