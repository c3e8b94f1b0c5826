//! Document Storage Module
//!
//! The persistence collaborator of the service: one collection of JSON-like
//! documents keyed by an identifier field.
//!
//! ## Core Concepts
//! - **Store**: `DocumentStore` is the async seam every backend implements
//!   (find, find-by-id, insert-one, replace-one, delete-one, create-index).
//! - **Filter**: `Filter` is the predicate tree passed to `find`, rendered to
//!   database query syntax or evaluated in process.
//! - **Backends**: `MemoryStore` (default, process-local) and `MongoStore`
//!   (behind the `mongodb` feature).

pub mod filter;
pub mod memory;
#[cfg(feature = "mongodb")]
pub mod mongo;
pub mod protocol;
pub mod store;

pub use filter::Filter;
pub use memory::MemoryStore;
#[cfg(feature = "mongodb")]
pub use mongo::MongoStore;
pub use protocol::{DeleteOutcome, Document, ID_FIELD, IndexSpec, ReplaceOutcome};
pub use store::{DocumentStore, SharedStore, StorageError, StorageResult};
