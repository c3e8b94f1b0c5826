//! Item Resource Module
//!
//! The single resource of the service and its CRUD endpoints.
//!
//! ## Responsibilities
//! - **Model**: `Item` and its mapping to and from stored documents.
//! - **Validation**: name must be non-empty, price strictly positive.
//! - **API**: list, get, create, replace and delete handlers; failures are
//!   reported through `ApiError`.

pub mod error;
pub mod handlers;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;
