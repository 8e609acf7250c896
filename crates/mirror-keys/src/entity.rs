//! Entity CSV parsing.
//!
//! The file is a plain comma-separated table whose first header cell must be
//! `entity`. Cells are not quoted; every cell is trimmed. The first empty line
//! ends the table.

use std::path::Path;
use std::time::Instant;

use mirror_keys_core::Key;

use crate::error::{MirrorError, Result};
use crate::time::elapsed_time_string;

/// Name of the mandatory first header column.
pub const ENTITY_COLUMN: &str = "entity";

/// One row of the entity table, keyed by header name in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    fields: Vec<(String, String)>,
}

impl Entity {
    /// Look up a field by header name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// The entity identifier (first column).
    pub fn id(&self) -> &str {
        self.get(ENTITY_COLUMN).unwrap_or_default()
    }

    /// All fields in header order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Parse the public key stored in `column`.
    ///
    /// An empty cell means the entity has no key.
    pub fn parse_key(&self, column: &str) -> Result<Option<Key>> {
        let cell = self
            .get(column)
            .ok_or_else(|| MirrorError::MissingColumn(column.to_string()))?;
        if cell.is_empty() {
            return Ok(None);
        }
        Ok(Some(cell.parse::<Key>()?))
    }
}

/// Parse entity CSV content.
pub fn parse_entity_csv(content: &str) -> Result<Vec<Entity>> {
    let mut lines = content.split('\n');
    let header_line = lines.next().unwrap_or_default();
    let headers: Vec<&str> = header_line.split(',').collect();

    if headers.first() != Some(&ENTITY_COLUMN) {
        return Err(MirrorError::InvalidHeader(format!(
            "CSV must have a header column with 1st column being '{}'",
            ENTITY_COLUMN
        )));
    }

    let mut entities = Vec::new();
    for (index, line) in lines.enumerate() {
        if line.is_empty() {
            break;
        }
        entities.push(construct_entity(index + 2, &headers, line)?);
    }

    Ok(entities)
}

/// Read and parse an entity CSV file.
pub fn read_entity_csv(path: impl AsRef<Path>) -> Result<Vec<Entity>> {
    let path = path.as_ref();
    tracing::info!("Parsing csv entity file ...");
    let start = Instant::now();

    let content = std::fs::read_to_string(path)?;
    let entities = parse_entity_csv(&content)?;

    tracing::info!(
        "{} entities were extracted from {} in {}",
        entities.len(),
        path.display(),
        elapsed_time_string(start.elapsed())
    );

    Ok(entities)
}

fn construct_entity(line: usize, headers: &[&str], row: &str) -> Result<Entity> {
    let cells: Vec<&str> = row.split(',').collect();
    if cells.len() < headers.len() {
        return Err(MirrorError::MalformedRow {
            line,
            expected: headers.len(),
            got: cells.len(),
        });
    }

    let fields = headers
        .iter()
        .zip(cells)
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .collect();

    Ok(Entity { fields })
}
