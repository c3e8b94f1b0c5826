use super::filter::Filter;
use super::protocol::*;
use super::store::{DocumentStore, StorageError, StorageResult};

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, Bson, doc, oid::ObjectId};
use mongodb::{Client, Collection, IndexModel};
use serde_json::Value;

/// Collection in a MongoDB database.
///
/// Identifiers are `ObjectId`s exposed as 24-character hex strings. A string
/// that is not a valid `ObjectId` cannot name a stored document and is
/// treated as absent.
pub struct MongoStore {
    collection: Collection<bson::Document>,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> StorageResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        let collection: Collection<bson::Document> =
            client.database(database).collection(collection);
        tracing::info!("Connected to MongoDB collection {}.{}", database, collection.name());
        Ok(Self { collection })
    }
}

pub(crate) fn to_bson(document: Document) -> StorageResult<bson::Document> {
    bson::to_document(&Value::Object(document))
        .map_err(|e| StorageError::InvalidDocument(e.to_string()))
}

pub(crate) fn filter_to_bson(filter: &Filter) -> StorageResult<bson::Document> {
    bson::to_document(&filter.to_query()).map_err(|e| StorageError::InvalidFilter(e.to_string()))
}

pub(crate) fn from_bson(mut document: bson::Document) -> StorageResult<Document> {
    if let Some(Bson::ObjectId(oid)) = document.get(ID_FIELD) {
        let hex = oid.to_hex();
        document.insert(ID_FIELD, hex);
    }

    match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(map) => Ok(map),
        other => Err(StorageError::InvalidDocument(format!(
            "expected a document, got {}",
            other
        ))),
    }
}

pub(crate) fn id_query(id: &str) -> Option<bson::Document> {
    ObjectId::parse_str(id).ok().map(|oid| doc! { ID_FIELD: oid })
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, filter: &Filter) -> StorageResult<Vec<Document>> {
        let query = filter_to_bson(filter)?;
        tracing::debug!("FIND: {}", query);

        let documents: Vec<bson::Document> = self.collection.find(query).await?.try_collect().await?;
        documents.into_iter().map(from_bson).collect()
    }

    async fn find_by_id(&self, id: &str) -> StorageResult<Option<Document>> {
        let Some(query) = id_query(id) else {
            return Ok(None);
        };
        self.collection.find_one(query).await?.map(from_bson).transpose()
    }

    async fn insert_one(&self, mut document: Document) -> StorageResult<String> {
        document.remove(ID_FIELD);
        let result = self.collection.insert_one(to_bson(document)?).await?;

        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(oid.to_hex()),
            other => Ok(other.to_string()),
        }
    }

    async fn replace_one(&self, id: &str, mut document: Document) -> StorageResult<ReplaceOutcome> {
        let Some(query) = id_query(id) else {
            return Ok(ReplaceOutcome::default());
        };
        document.remove(ID_FIELD);

        let result = self.collection.replace_one(query, to_bson(document)?).await?;
        Ok(ReplaceOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete_one(&self, id: &str) -> StorageResult<DeleteOutcome> {
        let Some(query) = id_query(id) else {
            return Ok(DeleteOutcome::default());
        };

        let result = self.collection.delete_one(query).await?;
        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }

    async fn create_index(&self, index: &IndexSpec) -> StorageResult<String> {
        let mut keys = bson::Document::new();
        for (field, direction) in &index.keys {
            keys.insert(field.as_str(), direction.as_i32());
        }

        let model = IndexModel::builder().keys(keys).build();
        let result = self.collection.create_index(model).await?;
        Ok(result.index_name)
    }
}
