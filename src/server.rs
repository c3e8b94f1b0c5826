//! Service Wiring
//!
//! Turns a [`Config`] into a running HTTP server: opens the document store,
//! makes sure the item index exists and mounts every route.

use crate::config::{Backend, Config};
use crate::items::handlers::*;
use crate::items::types::{NAME_FIELD, PRICE_FIELD};
use crate::search::handlers::handle_search;
use crate::storage::{DocumentStore, IndexSpec, MemoryStore, SharedStore, StorageResult};

use axum::Router;
use axum::extract::Extension;
use axum::routing::get;
use std::sync::Arc;

/// Compound index backing name lookups and price ranges.
pub fn item_index() -> IndexSpec {
    IndexSpec::ascending(&[NAME_FIELD, PRICE_FIELD])
}

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/items", get(handle_list_items).post(handle_create_item))
        .route("/items/search", get(handle_search))
        .route(
            "/items/:id",
            get(handle_get_item)
                .put(handle_replace_item)
                .delete(handle_delete_item),
        )
        .layer(Extension(store))
}

pub async fn ensure_indexes(store: &dyn DocumentStore) -> StorageResult<String> {
    let name = store.create_index(&item_index()).await?;
    tracing::info!("Index {} ready", name);
    Ok(name)
}

pub async fn open_store(config: &Config) -> anyhow::Result<SharedStore> {
    match config.backend {
        Backend::Memory => Ok(Arc::new(MemoryStore::new())),
        #[cfg(feature = "mongodb")]
        Backend::Mongo => {
            let store = crate::storage::MongoStore::connect(
                &config.mongo_uri,
                &config.database,
                &config.collection,
            )
            .await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "mongodb"))]
        Backend::Mongo => Err(anyhow::anyhow!(
            "backend `mongo` requires building with the `mongodb` feature"
        )),
    }
}

/// Opens the store, creates the index and serves until `shutdown` resolves.
pub async fn run(
    config: &Config,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    tracing::info!("Using {} backend", config.backend);
    let store = open_store(config).await?;
    ensure_indexes(store.as_ref()).await?;

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
