//! Test builders: ergonomic constructors for `Business` values and whole
//! directories.
//!
//! These builders are designed for readability in test assertions, not
//! for production use. They panic on invalid input rather than returning
//! `Result`.

use fake::faker::address::en::StreetName;
use fake::faker::company::en::CompanyName;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use soleconnect_core::types::{Business, BusinessInfo, Contact, Location, Review, ReviewKind};

// ---------------------------------------------------------------------------
// BusinessBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Business`] test fixtures.
///
/// ```rust
/// let shop = BusinessBuilder::new("Ace Shoe Repair")
///     .city("Tampa")
///     .rating(4.5)
///     .review(ReviewKind::Positive, "Came back looking new", 5)
///     .build();
/// ```
pub struct BusinessBuilder {
    id: String,
    name: String,
    phone: String,
    website: String,
    street: String,
    city: String,
    state: String,
    zip_code: String,
    country: String,
    description: String,
    rating: f64,
    reviews: Vec<Review>,
}

impl BusinessBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            phone: "(813) 555-0100".to_string(),
            website: String::new(),
            street: "100 Franklin St".to_string(),
            city: "Tampa".to_string(),
            state: "FL".to_string(),
            zip_code: "33602".to_string(),
            country: "US".to_string(),
            description: "Family-run shoe repair".to_string(),
            rating: 0.0,
            reviews: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = street.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        assert!((0.0..=5.0).contains(&rating), "rating {rating} out of range");
        self.rating = rating;
        self
    }

    pub fn review(mut self, kind: ReviewKind, text: &str, rating: u8) -> Self {
        assert!((1..=5).contains(&rating), "review rating {rating} out of range");
        self.reviews.push(Review {
            kind,
            text: text.to_string(),
            rating,
        });
        self
    }

    pub fn build(self) -> Business {
        Business {
            id: self.id,
            name: self.name,
            contact: Contact {
                phone: self.phone,
                website: self.website,
            },
            location: Location {
                street: self.street,
                city: self.city,
                state: self.state,
                zip_code: self.zip_code,
                country: self.country,
            },
            business_info: BusinessInfo {
                description: self.description,
                rating: self.rating,
            },
            reviews: self.reviews,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A rated shop in `city`.
pub fn rated(name: &str, city: &str, rating: f64) -> Business {
    BusinessBuilder::new(name).city(city).rating(rating).build()
}

/// An unrated shop (rating 0) in `city`.
pub fn unrated(name: &str, city: &str) -> Business {
    BusinessBuilder::new(name).city(city).build()
}

/// A shop whose city is the unknown sentinel.
pub fn unknown_city(name: &str) -> Business {
    BusinessBuilder::new(name).city("nan").build()
}

/// Assign positional ids the way the dataset accessor does, so hand-built
/// collections behave like loaded ones.
pub fn with_ids(mut businesses: Vec<Business>) -> Vec<Business> {
    for (index, business) in businesses.iter_mut().enumerate() {
        business.id = index.to_string();
    }
    businesses
}

// ---------------------------------------------------------------------------
// Volume corpus
// ---------------------------------------------------------------------------

/// Build a directory of `n` generated shops spread over a handful of
/// cities. Names and streets come from `fake`, so only assert invariants
/// over this corpus, never exact values. Roughly one in five shops is
/// unrated and one in ten has an unknown city.
pub fn build_directory(n: usize) -> Vec<Business> {
    const CITIES: &[&str] = &["Tampa", "Miami", "Orlando", "Jacksonville", "St. Petersburg"];
    with_ids(
        (0..n)
            .map(|i| {
                let name: String = CompanyName().fake();
                let street: String = StreetName().fake();
                let phone: String = PhoneNumber().fake();
                let city = if i % 10 == 9 {
                    "nan"
                } else {
                    CITIES[i % CITIES.len()]
                };
                let rating = match i % 5 {
                    4 => 0.0,
                    step => 3.0 + step as f64 * 0.5,
                };
                BusinessBuilder::new(name)
                    .street(street)
                    .phone(phone)
                    .city(city)
                    .rating(rating)
                    .build()
            })
            .collect(),
    )
}
