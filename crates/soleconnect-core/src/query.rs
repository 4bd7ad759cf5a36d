//! Query engine - pure functions over the loaded dataset.
//!
//! Every operation borrows from [`Dataset::businesses`](crate::Dataset::businesses)
//! and returns references in source order unless sorting is the point of
//! the operation. Nothing here mutates shared state, so all queries are
//! safe under unlimited concurrent reads.

use crate::types::Business;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Exact-id lookup. Linear scan; the collection is a few hundred records.
pub fn by_id<'a>(businesses: &'a [Business], id: &str) -> Option<&'a Business> {
    businesses.iter().find(|business| business.id == id)
}

/// All businesses in `city`, compared case-insensitively. The unknown-city
/// sentinel is not excluded here; callers that must skip it go through
/// [`Location::known_city`](crate::types::Location::known_city).
pub fn by_city<'a>(businesses: &'a [Business], city: &str) -> Vec<&'a Business> {
    businesses
        .iter()
        .filter(|business| business.location.city.eq_ignore_ascii_case(city))
        .collect()
}

/// Rated businesses (`rating > 0`) sorted descending by rating, truncated
/// to `limit`. The sort is stable, so ties keep source order.
pub fn top_rated(businesses: &[Business], limit: usize) -> Vec<&Business> {
    let mut rated: Vec<&Business> = businesses
        .iter()
        .filter(|business| business.business_info.is_rated())
        .collect();
    rated.sort_by(|a, b| b.rating().total_cmp(&a.rating()));
    rated.truncate(limit);
    rated
}

/// Other businesses in the same city as `business`, excluding itself,
/// capped at `limit`. Empty when the city is unknown.
pub fn related<'a>(
    businesses: &'a [Business],
    business: &Business,
    limit: usize,
) -> Vec<&'a Business> {
    let Some(city) = business.location.known_city() else {
        return Vec::new();
    };
    businesses
        .iter()
        .filter(|other| other.id != business.id && other.location.city.eq_ignore_ascii_case(city))
        .take(limit)
        .collect()
}

// ---------------------------------------------------------------------------
// City aggregation
// ---------------------------------------------------------------------------

/// One row of the per-city aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityCount {
    pub city: String,
    pub count: usize,
}

/// Businesses per city, excluding empty and unknown-sentinel cities.
///
/// Grouping is case-insensitive and keyed by the first casing seen in
/// source order, so "Tampa" and "TAMPA" land in one row. Sorted by count
/// descending, then city ascending, which makes the output deterministic.
pub fn city_counts(businesses: &[Business]) -> Vec<CityCount> {
    let mut counts: Vec<CityCount> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();
    for business in businesses {
        let Some(city) = business.location.known_city() else {
            continue;
        };
        match by_key.entry(city.to_lowercase()) {
            Entry::Occupied(slot) => counts[*slot.get()].count += 1,
            Entry::Vacant(slot) => {
                slot.insert(counts.len());
                counts.push(CityCount {
                    city: city.to_string(),
                    count: 1,
                });
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.city.cmp(&b.city)));
    counts
}

/// Sorted unique city names (first-seen casing), excluding empty and
/// unknown-sentinel cities. Drives the directory filter dropdown.
pub fn cities(businesses: &[Business]) -> Vec<String> {
    let mut names: Vec<String> = city_counts(businesses)
        .into_iter()
        .map(|row| row.city)
        .collect();
    names.sort();
    names
}

// ---------------------------------------------------------------------------
// Free-text search
// ---------------------------------------------------------------------------

/// Case-insensitive substring search across name, street, city, and
/// description. An empty or whitespace-only term returns the whole
/// collection unchanged. Results preserve source order; there is no
/// tokenisation and no ranking.
pub fn search<'a>(businesses: &'a [Business], term: &str) -> Vec<&'a Business> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return businesses.iter().collect();
    }
    businesses
        .iter()
        .filter(|business| matches_term(business, &needle))
        .collect()
}

/// Substring match against the searchable fields. The unknown-city
/// sentinel is skipped for city matching, but the record's other fields
/// still participate. `needle` must already be trimmed and lowercased.
fn matches_term(business: &Business, needle: &str) -> bool {
    business.name.to_lowercase().contains(needle)
        || business.location.street.to_lowercase().contains(needle)
        || business
            .location
            .known_city()
            .is_some_and(|city| city.to_lowercase().contains(needle))
        || business.business_info.description.to_lowercase().contains(needle)
}

// ---------------------------------------------------------------------------
// Composable filtering
// ---------------------------------------------------------------------------

fn default_max_rating() -> f64 {
    5.0
}

/// Explicit, serializable query state for the directory listing.
///
/// Filters apply in a fixed sequence: city equality, rating-range
/// inclusion, then free-text search, each narrowing the previous set.
/// Every step is a pure predicate, so the final set is independent of
/// that order; the filter harness verifies this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessFilter {
    /// Case-insensitive city equality; `None` or empty means all cities.
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub min_rating: f64,
    #[serde(default = "default_max_rating")]
    pub max_rating: f64,
    /// Free-text term, matched like [`search`].
    #[serde(default)]
    pub term: Option<String>,
}

impl Default for BusinessFilter {
    fn default() -> Self {
        Self {
            city: None,
            min_rating: 0.0,
            max_rating: default_max_rating(),
            term: None,
        }
    }
}

impl BusinessFilter {
    /// Apply all active filters, preserving source order.
    pub fn apply<'a>(&self, businesses: &'a [Business]) -> Vec<&'a Business> {
        let mut results: Vec<&Business> = match self.city.as_deref() {
            Some(city) if !city.is_empty() => by_city(businesses, city),
            _ => businesses.iter().collect(),
        };
        results.retain(|business| {
            let rating = business.rating();
            rating >= self.min_rating && rating <= self.max_rating
        });
        if let Some(term) = self.term.as_deref() {
            let needle = term.trim().to_lowercase();
            if !needle.is_empty() {
                results.retain(|business| matches_term(business, &needle));
            }
        }
        results
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// One page of a filtered result sequence, with the totals the listing
/// needs to render pagination controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number as requested.
    pub page: usize,
    pub per_page: usize,
    /// Length of the full filtered sequence.
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Convert the item type while keeping the paging totals.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

/// Slice out the 1-based `page` of `items`. Pages past the end are empty,
/// not an error. A `per_page` of zero is clamped to one.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total = items.len();
    let start = (page - 1).saturating_mul(per_page);
    let slice = if start >= total {
        &[] as &[T]
    } else {
        &items[start..(start + per_page).min(total)]
    };
    Page {
        items: slice.to_vec(),
        page,
        per_page,
        total,
        total_pages: total.div_ceil(per_page),
    }
}
