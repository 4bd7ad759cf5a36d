//! soleconnect-core - dataset accessor and query engine for SoleConnect.
//!
//! This crate holds everything below the HTTP surface: the business data
//! model, the one-time dataset load, the pure query operations every page
//! is built from, and the application configuration.
//!
//! # Architecture
//!
//! ```text
//! Dataset ──► Query ──► Web (axum JSON API)
//!               │
//! Content ──────┘  (blog + FAQ, separate crate)
//! ```
//!
//! The dataset is materialised once at startup and never mutated, so every
//! query is a pure function that is safe under unlimited concurrent reads
//! with no locking.

pub mod config;
pub mod dataset;
pub mod query;
pub mod types;

pub use dataset::Dataset;
pub use types::{Business, Metadata};
