//! Storage Data Types
//!
//! The shapes exchanged between the HTTP layer and a [`DocumentStore`](super::store::DocumentStore):
//! the JSON document itself, write outcomes and index definitions.
//!
//! Outcomes mirror what a document database reports for single-document writes,
//! so callers can distinguish "matched nothing" from "matched and changed".

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A schema-flexible JSON record.
pub type Document = Map<String, Value>;

/// Field holding the storage-assigned identifier of every document.
pub const ID_FIELD: &str = "_id";

/// Result of replacing a document by identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceOutcome {
    /// Number of documents whose identifier matched (0 or 1).
    pub matched_count: u64,
    /// Number of documents actually changed by the replacement.
    pub modified_count: u64,
}

/// Result of deleting a document by identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexDirection {
    Ascending,
    Descending,
}

impl IndexDirection {
    pub fn as_i32(self) -> i32 {
        match self {
            IndexDirection::Ascending => 1,
            IndexDirection::Descending => -1,
        }
    }
}

/// A (possibly compound) index over document fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSpec {
    pub keys: Vec<(String, IndexDirection)>,
}

impl IndexSpec {
    /// Compound index with every field in ascending order.
    pub fn ascending(fields: &[&str]) -> Self {
        Self {
            keys: fields
                .iter()
                .map(|f| (f.to_string(), IndexDirection::Ascending))
                .collect(),
        }
    }

    /// Database-style default name, e.g. `name_1_price_1`.
    pub fn name(&self) -> String {
        self.keys
            .iter()
            .map(|(field, dir)| format!("{}_{}", field, dir.as_i32()))
            .collect::<Vec<_>>()
            .join("_")
    }
}
