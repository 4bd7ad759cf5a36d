//! SoleConnect - a Florida shoe-repair directory.
//!
//! A static-dataset directory site: browsable listings with filtering and
//! pagination, per-shop detail with same-city suggestions, top-rated
//! highlights, city aggregation, a blog, FAQ, and a demo contact
//! endpoint. This facade crate re-exports the member crates so that
//! integration tests and downstream tooling have one import root.
//!
//! # Architecture
//!
//! ```text
//! Dataset ──► Query ──► Web (axum JSON API)
//!               │
//! Content ──────┘  (blog + FAQ)
//! ```
//!
//! The dataset is loaded once at startup and shared immutably; every
//! query is a pure function over it, so the whole API is safe under
//! concurrent reads with no locking.

pub use soleconnect_content as content;
pub use soleconnect_core::{config, dataset, query, types, Business, Dataset, Metadata};
pub use soleconnect_web as web;
