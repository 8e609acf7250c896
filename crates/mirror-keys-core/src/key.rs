//! Key material: single public keys and ordered key lists.
//!
//! A [`Key`] is a tree. Lists own their children by value, so a key can
//! never contain itself and recursion over it always terminates.

use std::fmt;
use std::str::FromStr;

use crate::crypto::Ed25519PublicKey;
use crate::error::CoreError;
use crate::proto;

/// A cryptographic key value.
#[derive(Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Key {
    /// A single Ed25519 public key.
    Ed25519(Ed25519PublicKey),
    /// An ordered list of keys.
    List(KeyList),
}

impl Key {
    /// Returns the public key if this is a single key.
    pub fn as_ed25519(&self) -> Option<&Ed25519PublicKey> {
        match self {
            Key::Ed25519(pk) => Some(pk),
            Key::List(_) => None,
        }
    }

    /// Returns the list if this is a key list.
    pub fn as_list(&self) -> Option<&KeyList> {
        match self {
            Key::Ed25519(_) => None,
            Key::List(list) => Some(list),
        }
    }

    /// Number of list levels above the deepest key (0 for a single key).
    pub fn depth(&self) -> usize {
        match self {
            Key::Ed25519(_) => 0,
            Key::List(list) => 1 + list.iter().map(Key::depth).max().unwrap_or(0),
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Ed25519(pk) => fmt::Debug::fmt(pk, f),
            Key::List(list) => fmt::Debug::fmt(list, f),
        }
    }
}

impl From<Ed25519PublicKey> for Key {
    fn from(pk: Ed25519PublicKey) -> Self {
        Key::Ed25519(pk)
    }
}

impl From<KeyList> for Key {
    fn from(list: KeyList) -> Self {
        Key::List(list)
    }
}

impl FromStr for Key {
    type Err = CoreError;

    /// Parses a single public key from raw or DER-prefixed hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Ed25519PublicKey>().map(Key::Ed25519)
    }
}

impl TryFrom<proto::Key> for Key {
    type Error = CoreError;

    fn try_from(value: proto::Key) -> Result<Self, Self::Error> {
        match value.key {
            Some(proto::key::Key::Ed25519(bytes)) => {
                Ed25519PublicKey::try_from(bytes.as_slice()).map(Key::Ed25519)
            }
            Some(proto::key::Key::KeyList(list)) => list
                .keys
                .into_iter()
                .map(Key::try_from)
                .collect::<Result<KeyList, _>>()
                .map(Key::List),
            None => Err(CoreError::UnsupportedKeyType(
                "message carries no recognized key field".into(),
            )),
        }
    }
}

/// An ordered list of keys.
///
/// Order is significant: it is preserved through encoding and never sorted
/// or deduplicated.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyList(Vec<Key>);

impl KeyList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a key.
    pub fn push(&mut self, key: impl Into<Key>) {
        self.0.push(key.into());
    }

    /// Builder-style append.
    pub fn with(mut self, key: impl Into<Key>) -> Self {
        self.push(key);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.0.iter()
    }

    /// View the keys as a slice.
    pub fn as_slice(&self) -> &[Key] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Key> {
        self.0
    }
}

impl fmt::Debug for KeyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeyList").field(&self.0).finish()
    }
}

impl From<Vec<Key>> for KeyList {
    fn from(keys: Vec<Key>) -> Self {
        Self(keys)
    }
}

impl FromIterator<Key> for KeyList {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a KeyList {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for KeyList {
    type Item = Key;
    type IntoIter = std::vec::IntoIter<Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
