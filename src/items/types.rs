use crate::storage::{Document, ID_FIELD, StorageError};

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NAME_FIELD: &str = "name";
pub const PRICE_FIELD: &str = "price";

/// A catalog item as exchanged over HTTP.
///
/// `id` is assigned by the store on creation; it is ignored in request bodies.
/// Missing `name` and `price` default to values that fail validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, description: Option<&str>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.map(str::to_string),
            price,
        }
    }

    /// Storage form: every field except `id`, which the store manages.
    pub fn to_document(&self) -> Result<Document, StorageError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(mut document)) => {
                document.remove("id");
                Ok(document)
            }
            Ok(other) => Err(StorageError::InvalidDocument(format!(
                "item serialized to {}",
                other
            ))),
            Err(e) => Err(StorageError::InvalidDocument(e.to_string())),
        }
    }

    pub fn from_document(mut document: Document) -> Result<Self, StorageError> {
        if let Some(id) = document.remove(ID_FIELD) {
            let id = match id {
                Value::String(s) => s,
                other => other.to_string(),
            };
            document.insert("id".to_string(), Value::String(id));
        }

        serde_json::from_value(Value::Object(document))
            .map_err(|e| StorageError::InvalidDocument(e.to_string()))
    }
}
