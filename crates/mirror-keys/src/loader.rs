//! One-shot loader: entity CSV in, encoded keys out.
//!
//! Each entity's key cell is parsed and re-encoded. A record whose key cannot
//! be handled is rejected on its own; the remaining records still load.

use std::path::PathBuf;

use serde::Deserialize;

use crate::encoder::{encode, EncodedKey};
use crate::entity::{read_entity_csv, Entity};
use crate::error::Result;

/// Configuration for the entity loader.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Path of the entity CSV file.
    pub file_path: PathBuf,
    /// Header name of the column holding the public key.
    pub key_column: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from("entities.csv"),
            key_column: "key".to_string(),
        }
    }
}

/// An entity with its key ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityKeyRecord {
    pub entity_id: String,
    /// `None` when the entity has no key.
    pub key: Option<EncodedKey>,
}

/// An entity whose key could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    pub entity_id: String,
    pub reason: String,
}

/// Outcome of a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub records: Vec<EntityKeyRecord>,
    pub rejected: Vec<RejectedRecord>,
}

impl LoadReport {
    /// Total number of entities seen.
    pub fn total(&self) -> usize {
        self.records.len() + self.rejected.len()
    }
}

/// Read the configured CSV file and encode every entity's key.
pub fn load_entity_keys(config: &LoaderConfig) -> Result<LoadReport> {
    let entities = read_entity_csv(&config.file_path)?;
    let report = encode_entity_keys(&entities, &config.key_column);

    tracing::info!(
        encoded = report.records.len(),
        rejected = report.rejected.len(),
        "loaded entity keys from {}",
        config.file_path.display()
    );

    Ok(report)
}

/// Encode the key in `key_column` for each entity.
pub fn encode_entity_keys(entities: &[Entity], key_column: &str) -> LoadReport {
    let mut report = LoadReport::default();

    for entity in entities {
        match encode_entity_key(entity, key_column) {
            Ok(key) => report.records.push(EntityKeyRecord {
                entity_id: entity.id().to_string(),
                key,
            }),
            Err(e) => {
                tracing::warn!("Rejecting entity {}: {}", entity.id(), e);
                report.rejected.push(RejectedRecord {
                    entity_id: entity.id().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}

fn encode_entity_key(entity: &Entity, key_column: &str) -> Result<Option<EncodedKey>> {
    entity
        .parse_key(key_column)?
        .map(|key| encode(&key))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::parse_entity_csv;
    use std::io::Write;

    const KEY_A: &str = "0101010101010101010101010101010101010101010101010101010101010101";

    #[test]
    fn test_config_default() {
        let config = LoaderConfig::default();
        assert_eq!(config.file_path, PathBuf::from("entities.csv"));
        assert_eq!(config.key_column, "key");
    }

    #[test]
    fn test_config_from_json_partial() {
        let config: LoaderConfig =
            serde_json::from_str(r#"{"file_path": "/data/accounts.csv"}"#).unwrap();
        assert_eq!(config.file_path, PathBuf::from("/data/accounts.csv"));
        assert_eq!(config.key_column, "key");
    }

    #[test]
    fn test_encode_entity_keys_mixed() {
        let csv = format!(
            "entity,key\n0.0.1,{}\n0.0.2,\n0.0.3,zz\n0.0.4,302a300506032b6570032100{}\n",
            KEY_A, KEY_A
        );
        let entities = parse_entity_csv(&csv).unwrap();
        let report = encode_entity_keys(&entities, "key");

        assert_eq!(report.total(), 4);
        assert_eq!(report.records.len(), 3);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].entity_id, "0.0.3");

        let first = report.records[0].key.as_ref().unwrap();
        assert_eq!(first.fingerprint.as_deref(), Some(KEY_A));
        assert_eq!(first.wire_hex(), format!("0a20{}", KEY_A));

        assert_eq!(report.records[1].key, None);
        assert_eq!(report.records[2].key.as_ref(), Some(first));
    }

    #[test]
    fn test_missing_key_column_rejects_every_record() {
        let entities = parse_entity_csv("entity,memo\n1,a\n2,b\n").unwrap();
        let report = encode_entity_keys(&entities, "key");
        assert!(report.records.is_empty());
        assert_eq!(report.rejected.len(), 2);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "entity,memo,public_key\n0.0.98,treasury,{}\n", KEY_A).unwrap();

        let config = LoaderConfig {
            file_path: file.path().to_path_buf(),
            key_column: "public_key".to_string(),
        };
        let report = load_entity_keys(&config).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].entity_id, "0.0.98");
    }

    #[test]
    fn test_load_bad_header_fails_whole_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "account,key\n1,\n").unwrap();

        let config = LoaderConfig {
            file_path: file.path().to_path_buf(),
            ..LoaderConfig::default()
        };
        assert!(load_entity_keys(&config).is_err());
    }
}
