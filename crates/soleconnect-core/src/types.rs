//! Core types for soleconnect-core.
//!
//! This module defines the data model shared across all layers: the
//! [`Business`] directory entry with its nested contact/location/info
//! records, per-shop [`Review`]s, and the dataset-level [`Metadata`]
//! summary.

use serde::{Deserialize, Serialize};

/// Sentinel city value meaning "unknown", inherited from the dataset
/// generation step. Compared case-insensitively; never a real city in
/// city lists, counts, or city filters.
pub const CITY_UNKNOWN: &str = "nan";

/// Sentinel description meaning the source had no description text.
pub const NO_DESCRIPTION: &str = "no data";

/// One directory entry: a shoe-repair shop with contact, location,
/// description, rating, and reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Stringified zero-based index, assigned by position at load time.
    /// Absent in the source document; not stable across regenerations
    /// that reorder records.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub contact: Contact,
    pub location: Location,
    pub business_info: BusinessInfo,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Business {
    /// Rating shortcut; 0.0 means unrated.
    pub fn rating(&self) -> f64 {
        self.business_info.rating
    }
}

/// Phone and website; either may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub website: String,
}

/// Street address. All fields are free text as scraped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Location {
    /// The city if it is a real value: `None` for empty strings and the
    /// case-insensitive [`CITY_UNKNOWN`] sentinel.
    pub fn known_city(&self) -> Option<&str> {
        if self.city.is_empty() || self.city.eq_ignore_ascii_case(CITY_UNKNOWN) {
            None
        } else {
            Some(&self.city)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessInfo {
    /// Free-text description, or the literal [`NO_DESCRIPTION`] sentinel.
    pub description: String,
    /// In [0, 5]; 0 means unrated and is excluded from top-rated queries.
    pub rating: f64,
}

impl BusinessInfo {
    pub fn is_rated(&self) -> bool {
        self.rating > 0.0
    }

    /// The description if the source had one (`None` for the sentinel).
    pub fn known_description(&self) -> Option<&str> {
        if self.description == NO_DESCRIPTION {
            None
        } else {
            Some(&self.description)
        }
    }
}

/// Review polarity as labelled in the source dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewKind {
    Positive,
    Negative,
}

impl std::fmt::Display for ReviewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewKind::Positive => write!(f, "positive"),
            ReviewKind::Negative => write!(f, "negative"),
        }
    }
}

/// A single customer review. Order within [`Business::reviews`] is source
/// insertion order and carries no meaning beyond display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "type")]
    pub kind: ReviewKind,
    pub text: String,
    /// Integer 1-5.
    pub rating: u8,
}

/// Dataset-level summary exactly as stored in the source document. Served
/// as-is and never recomputed, so it may drift from the live collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub total_businesses: usize,
    pub generated_at: String,
    pub source: String,
    pub average_rating: f64,
    pub total_rated_businesses: usize,
}
