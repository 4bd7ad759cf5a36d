//! Shared immutable application state.

use soleconnect_core::{config::Config, Dataset};
use std::sync::Arc;

/// Everything a handler needs: the one-time-loaded dataset and the
/// application configuration. Both are read-only after startup, so the
/// state is a pair of `Arc`s and nothing else.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(dataset: Dataset, config: Config) -> Self {
        Self {
            dataset: Arc::new(dataset),
            config: Arc::new(config),
        }
    }
}
