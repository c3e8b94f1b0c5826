use super::filter::Filter;
use super::protocol::*;
use super::store::{DocumentStore, StorageResult};

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

struct StoredDocument {
    seq: u64,
    document: Document,
}

/// In-process document collection.
///
/// Documents are keyed by a UUID string and returned by `find` in insertion
/// order. Index definitions are recorded but not used for lookups.
pub struct MemoryStore {
    documents: DashMap<String, StoredDocument>,
    indexes: DashMap<String, IndexSpec>,
    next_seq: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
            indexes: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Names of the indexes created so far, sorted.
    pub fn index_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.indexes.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    fn store_local(&self, id: String, seq: u64, mut document: Document) {
        document.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        self.documents.insert(id, StoredDocument { seq, document });
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, filter: &Filter) -> StorageResult<Vec<Document>> {
        let compiled = filter.compile()?;

        let mut matched: Vec<(u64, Document)> = self
            .documents
            .iter()
            .filter(|entry| compiled.matches(&entry.value().document))
            .map(|entry| (entry.value().seq, entry.value().document.clone()))
            .collect();
        matched.sort_by_key(|(seq, _)| *seq);

        tracing::debug!("FIND: {} documents matched", matched.len());
        Ok(matched.into_iter().map(|(_, doc)| doc).collect())
    }

    async fn find_by_id(&self, id: &str) -> StorageResult<Option<Document>> {
        Ok(self.documents.get(id).map(|entry| entry.document.clone()))
    }

    async fn insert_one(&self, document: Document) -> StorageResult<String> {
        let id = Uuid::new_v4().to_string();
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.store_local(id.clone(), seq, document);
        Ok(id)
    }

    async fn replace_one(&self, id: &str, mut document: Document) -> StorageResult<ReplaceOutcome> {
        let Some(mut entry) = self.documents.get_mut(id) else {
            return Ok(ReplaceOutcome::default());
        };

        document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
        let modified = entry.document != document;
        if modified {
            entry.document = document;
        }

        Ok(ReplaceOutcome {
            matched_count: 1,
            modified_count: u64::from(modified),
        })
    }

    async fn delete_one(&self, id: &str) -> StorageResult<DeleteOutcome> {
        let deleted_count = u64::from(self.documents.remove(id).is_some());
        Ok(DeleteOutcome { deleted_count })
    }

    async fn create_index(&self, index: &IndexSpec) -> StorageResult<String> {
        let name = index.name();
        self.indexes
            .entry(name.clone())
            .or_insert_with(|| index.clone());
        Ok(name)
    }
}
