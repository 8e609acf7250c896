//! Crypto transfer row model.

use serde::{Deserialize, Serialize};

/// A table-backed model.
pub trait Model {
    const TABLE_NAME: &'static str;
    const TABLE_ALIAS: &'static str;

    /// Column name qualified by the table alias, e.g. `ctr.amount`.
    fn full_name(column: &str) -> String {
        format!("{}.{}", Self::TABLE_ALIAS, column)
    }
}

/// A single hbar movement: `amount` tinybars credited to (or, when negative,
/// debited from) `entity_id` at `consensus_timestamp` nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoTransfer {
    pub amount: i64,
    pub consensus_timestamp: i64,
    pub entity_id: i64,
}

impl CryptoTransfer {
    pub const AMOUNT: &'static str = "amount";
    pub const CONSENSUS_TIMESTAMP: &'static str = "consensus_timestamp";
    pub const ENTITY_ID: &'static str = "entity_id";
}

impl Model for CryptoTransfer {
    const TABLE_NAME: &'static str = "crypto_transfer";
    const TABLE_ALIAS: &'static str = "ctr";
}
