//! Dataset accessor - materialises the bundled source document into
//! addressable in-memory records.
//!
//! The dataset is the single source of truth; every query reads from it
//! and nothing mutates it after load. The source document is JSON with
//! two top-level fields, `metadata` and `businesses`; business records
//! arrive without ids and get one assigned by position during load.

use crate::types::{Business, Metadata};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The bundled source document, shipped inside the binary.
const EMBEDDED: &str = include_str!("../data/businesses.json");

/// Errors raised while materialising a dataset. These surface at startup
/// only; queries have no error conditions.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The document is not valid JSON or is missing required fields. The
    /// document ships with the binary, so this is a packaging bug and the
    /// process should not come up.
    #[error("malformed dataset document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read dataset from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Wire shape of the source document.
#[derive(Deserialize)]
struct SourceDocument {
    metadata: Metadata,
    businesses: Vec<Business>,
}

/// An immutable, id-annotated collection of businesses plus the dataset
/// metadata, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Dataset {
    metadata: Metadata,
    businesses: Vec<Business>,
}

impl Dataset {
    /// Parse the embedded document.
    pub fn load() -> Result<Self, DatasetError> {
        Self::from_json(EMBEDDED)
    }

    /// Parse a source document from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let document: SourceDocument = serde_json::from_str(raw)?;
        Ok(Self::from_document(document))
    }

    /// Read and parse a source document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    fn from_document(mut document: SourceDocument) -> Self {
        for (index, business) in document.businesses.iter_mut().enumerate() {
            business.id = index.to_string();
        }
        Self {
            metadata: document.metadata,
            businesses: document.businesses,
        }
    }

    /// All records in source order, id-annotated. Ids are positional:
    /// regenerating the source with reordered records changes them.
    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    /// The metadata record exactly as stored; not validated against the
    /// live collection.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }
}
