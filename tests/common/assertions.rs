//! Domain-specific assertion macros for the soleconnect harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! directory invariant that was violated. They accept anything iterable
//! over `Business` values or references.

/// Assert every id in a result sequence is distinct.
macro_rules! assert_ids_unique {
    ($businesses:expr) => {{
        let mut seen = std::collections::HashSet::new();
        for business in $businesses.iter() {
            if !seen.insert(business.id.as_str()) {
                panic!(
                    "assert_ids_unique! failed: duplicate id {:?} ({})",
                    business.id, business.name
                );
            }
        }
    }};
}
pub(crate) use assert_ids_unique;

/// Assert that the ids of `$businesses` equal `$ids`, in order.
macro_rules! assert_ids {
    ($businesses:expr, $ids:expr) => {{
        let actual: Vec<&str> = $businesses.iter().map(|b| b.id.as_str()).collect();
        let expected: Vec<&str> = $ids.to_vec();
        pretty_assertions::assert_eq!(actual, expected, "assert_ids! failed");
    }};
}
pub(crate) use assert_ids;

/// Assert a result sequence is sorted non-increasing by rating.
macro_rules! assert_sorted_by_rating_desc {
    ($businesses:expr) => {{
        let ratings: Vec<f64> = $businesses.iter().map(|b| b.business_info.rating).collect();
        for pair in ratings.windows(2) {
            if pair[0] < pair[1] {
                panic!(
                    "assert_sorted_by_rating_desc! failed: {} before {}\n  all ratings: {:?}",
                    pair[0], pair[1], ratings
                );
            }
        }
    }};
}
pub(crate) use assert_sorted_by_rating_desc;

/// Assert two result sequences contain the same businesses in the same
/// order, comparing by id.
macro_rules! assert_same_order {
    ($left:expr, $right:expr) => {{
        let left: Vec<&str> = $left.iter().map(|b| b.id.as_str()).collect();
        let right: Vec<&str> = $right.iter().map(|b| b.id.as_str()).collect();
        pretty_assertions::assert_eq!(left, right, "assert_same_order! failed");
    }};
}
pub(crate) use assert_same_order;

/// Assert two result sequences contain the same businesses ignoring
/// order, comparing by id.
macro_rules! assert_same_set {
    ($left:expr, $right:expr) => {{
        let mut left: Vec<&str> = $left.iter().map(|b| b.id.as_str()).collect();
        let mut right: Vec<&str> = $right.iter().map(|b| b.id.as_str()).collect();
        left.sort();
        right.sort();
        pretty_assertions::assert_eq!(left, right, "assert_same_set! failed");
    }};
}
pub(crate) use assert_same_set;
