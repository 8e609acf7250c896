//! Protobuf wire schema for key material.
//!
//! Hand-derived equivalents of:
//!
//! ```proto
//! message Key {
//!   oneof key {
//!     bytes ed25519 = 1;
//!     KeyList keyList = 2;
//!   }
//! }
//!
//! message KeyList {
//!   repeated Key keys = 1;
//! }
//! ```
//!
//! The tag numbers are part of the persisted format and must never change.

/// A single key: either raw Ed25519 public key bytes or a nested key list.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Key {
    #[prost(oneof = "key::Key", tags = "1, 2")]
    pub key: ::core::option::Option<key::Key>,
}

/// Nested message and enum types in `Key`.
pub mod key {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Key {
        #[prost(bytes, tag = "1")]
        Ed25519(::prost::alloc::vec::Vec<u8>),
        #[prost(message, tag = "2")]
        KeyList(super::KeyList),
    }
}

/// An ordered list of keys.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyList {
    #[prost(message, repeated, tag = "1")]
    pub keys: ::prost::alloc::vec::Vec<Key>,
}

impl Key {
    /// Wrap raw Ed25519 bytes.
    pub fn ed25519(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            key: Some(key::Key::Ed25519(bytes.into())),
        }
    }

    /// Wrap an ordered sequence of keys.
    pub fn key_list(keys: Vec<Key>) -> Self {
        Self {
            key: Some(key::Key::KeyList(KeyList { keys })),
        }
    }
}
