use super::filter::Filter;
use super::protocol::{DeleteOutcome, Document, IndexSpec, ReplaceOutcome};

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// The filter cannot be evaluated (e.g. an unusable name pattern).
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// A document could not be converted to or from the backend's format.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// A single collection of documents keyed by [`ID_FIELD`](super::protocol::ID_FIELD).
///
/// Implementations own the identifier: `insert_one` assigns it and
/// `replace_one` keeps it, whatever the caller put in the document.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents matching `filter`, in storage order.
    async fn find(&self, filter: &Filter) -> StorageResult<Vec<Document>>;

    async fn find_by_id(&self, id: &str) -> StorageResult<Option<Document>>;

    /// Stores a new document and returns its assigned identifier.
    async fn insert_one(&self, document: Document) -> StorageResult<String>;

    async fn replace_one(&self, id: &str, document: Document) -> StorageResult<ReplaceOutcome>;

    async fn delete_one(&self, id: &str) -> StorageResult<DeleteOutcome>;

    /// Creates `index` if missing and returns its name.
    async fn create_index(&self, index: &IndexSpec) -> StorageResult<String>;
}

/// Store handle shared by every request handler.
pub type SharedStore = Arc<dyn DocumentStore>;
