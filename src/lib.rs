//! Item Catalog Service Library
//!
//! This library crate defines the modules behind the `item-catalog` binary
//! (`main.rs`).
//!
//! ## Architecture Modules
//!
//! - **`items`**: The `Item` resource: data record, validation rules and the
//!   CRUD HTTP handlers.
//! - **`search`**: The search endpoint. Parses optional criteria and composes
//!   them into a single compound filter.
//! - **`storage`**: The document store seam (`DocumentStore`), the `Filter`
//!   predicate model and the in-memory and MongoDB backends.
//! - **`server`**: Router construction, index creation and startup.
//! - **`config`**: Command-line / environment configuration.

pub mod config;
pub mod items;
pub mod search;
pub mod server;
pub mod storage;
