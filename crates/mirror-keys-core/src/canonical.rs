//! Canonical wire encoding for key messages.
//!
//! Keys are serialized as protobuf:
//! - Fields are written in ascending tag order
//! - Byte strings and nested messages are length-delimited
//! - A set oneof field is always written, even when its message is empty
//! - Repeated keys keep their given order
//!
//! The byte layout is persisted by downstream readers. Changing it breaks
//! every stored key.

use bytes::Bytes;
use prost::Message;

use crate::error::CoreError;
use crate::key::Key;
use crate::proto;

/// Wire tags (field number << 3 | wire type 2).
pub mod tags {
    /// `Key.ed25519`, field 1, length-delimited.
    pub const ED25519: u8 = 0x0a;
    /// `Key.keyList`, field 2, length-delimited.
    pub const KEY_LIST: u8 = 0x12;
    /// `KeyList.keys`, field 1, length-delimited.
    pub const KEYS: u8 = 0x0a;
}

/// Serialize a key message to its canonical wire bytes.
pub fn wire_bytes(message: &proto::Key) -> Bytes {
    Bytes::from(message.encode_to_vec())
}

/// Decode wire bytes into a key message without interpreting it.
pub fn decode_message(bytes: &[u8]) -> Result<proto::Key, CoreError> {
    Ok(proto::Key::decode(bytes)?)
}

/// Decode wire bytes into a [`Key`].
///
/// Fails with [`CoreError::UnsupportedKeyType`] when a message (at any depth)
/// sets no recognized key field.
pub fn decode_key(bytes: &[u8]) -> Result<Key, CoreError> {
    Key::try_from(decode_message(bytes)?)
}
