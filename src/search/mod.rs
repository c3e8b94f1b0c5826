//! Item Search Module
//!
//! Keyword and price-range search over the item collection.
//!
//! ## Overview
//! A search request carries up to three optional criteria (name pattern,
//! minimum price, maximum price). They are parsed leniently, folded into a
//! single compound `Filter` and handed to the document store unchanged.
//!
//! ## Submodules
//! - **`composer`**: Builds the compound predicate from the criteria.
//! - **`handlers`**: HTTP handler for `GET /items/search`.
//! - **`types`**: Query-string parameters and parsed criteria.

pub mod composer;
pub mod handlers;
pub mod types;
