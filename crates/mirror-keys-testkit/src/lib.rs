//! # Mirror Keys Testkit
//!
//! Testing utilities for mirror keys.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known keys with their expected wire bytes and fingerprints
//! - **Generators**: Proptest strategies for key trees
//! - **Fixtures**: Deterministic keypairs and entity CSV files
//!
//! ## Golden Vectors
//!
//! ```rust
//! use mirror_keys_testkit::vectors::verify_all_vectors;
//!
//! for result in verify_all_vectors() {
//!     assert!(result.matches, "{}", result.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use mirror_keys_testkit::generators::key;
//!
//! proptest! {
//!     #[test]
//!     fn encode_is_deterministic(k in key(3, 4)) {
//!         prop_assert_eq!(mirror_keys::encode(&k).unwrap(), mirror_keys::encode(&k).unwrap());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use mirror_keys_testkit::fixtures::KeyFixture;
//!
//! let fixture = KeyFixture::new(2);
//! let csv = fixture.entity_csv();
//! assert!(csv.starts_with("entity,"));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{random_key, KeyFixture};
pub use generators::{key, key_list, wrap_in_singletons};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector, VectorResult};
