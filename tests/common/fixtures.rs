//! Static dataset fixtures used across harnesses.

use super::builders::{rated, unknown_city, with_ids};
use soleconnect_core::types::Business;
use soleconnect_core::Dataset;

/// A small source document exercising every data-model corner: sentinel
/// city, unrated shop, "no data" description, mixed-case duplicate city,
/// empty city, and metadata that deliberately disagrees with the
/// collection (the accessor must serve it untouched).
pub const FIXTURE_DOCUMENT: &str = r#"{
  "metadata": {
    "total_businesses": 9,
    "generated_at": "2025-03-18T09:42:17Z",
    "source": "fixture",
    "average_rating": 4.0,
    "total_rated_businesses": 6
  },
  "businesses": [
    {
      "name": "Ace Shoe Repair",
      "contact": { "phone": "(813) 555-0142", "website": "https://ace.example.com" },
      "location": { "street": "1204 N Franklin St", "city": "Tampa", "state": "FL", "zip_code": "33602", "country": "US" },
      "business_info": { "description": "Full resoling and heel replacement downtown.", "rating": 4.5 },
      "reviews": [
        { "type": "positive", "text": "Came back looking new.", "rating": 5 },
        { "type": "negative", "text": "Busy on weekends.", "rating": 3 }
      ]
    },
    {
      "name": "Best Cobbler",
      "contact": { "phone": "", "website": "" },
      "location": { "street": "17 Shady Ln", "city": "nan", "state": "FL", "zip_code": "33040", "country": "US" },
      "business_info": { "description": "no data", "rating": 0.0 },
      "reviews": []
    },
    {
      "name": "Tampa Soles",
      "contact": { "phone": "(813) 555-0177", "website": "" },
      "location": { "street": "4515 S Dale Mabry Hwy", "city": "Tampa", "state": "FL", "zip_code": "33611", "country": "US" },
      "business_info": { "description": "Athletic shoe specialists.", "rating": 3.8 },
      "reviews": [
        { "type": "positive", "text": "Saved my running shoes.", "rating": 4 }
      ]
    },
    {
      "name": "Miami Heel Bar",
      "contact": { "phone": "(305) 555-0199", "website": "https://heelbar.example.com" },
      "location": { "street": "728 Collins Ave", "city": "Miami", "state": "FL", "zip_code": "33139", "country": "US" },
      "business_info": { "description": "Designer heel repair near the beach.", "rating": 4.9 },
      "reviews": []
    },
    {
      "name": "Sunshine Shoe Fix",
      "contact": { "phone": "", "website": "" },
      "location": { "street": "902 W Kennedy Blvd", "city": "TAMPA", "state": "FL", "zip_code": "33606", "country": "US" },
      "business_info": { "description": "Quick heel tips and stretching.", "rating": 4.0 },
      "reviews": []
    },
    {
      "name": "Orlando Boot Works",
      "contact": { "phone": "(407) 555-0108", "website": "" },
      "location": { "street": "2217 Edgewater Dr", "city": "Orlando", "state": "FL", "zip_code": "32804", "country": "US" },
      "business_info": { "description": "no data", "rating": 0.0 },
      "reviews": []
    },
    {
      "name": "Gulf Coast Leather",
      "contact": { "phone": "(727) 555-0122", "website": "" },
      "location": { "street": "3901 49th St N", "city": "St. Petersburg", "state": "FL", "zip_code": "33709", "country": "US" },
      "business_info": { "description": "Salt-water damage a specialty.", "rating": 3.2 },
      "reviews": [
        { "type": "negative", "text": "Hard to reach by phone.", "rating": 2 }
      ]
    },
    {
      "name": "Everglades Sole Studio",
      "contact": { "phone": "(239) 555-0139", "website": "" },
      "location": { "street": "2301 Tamiami Trl E", "city": "", "state": "FL", "zip_code": "34112", "country": "US" },
      "business_info": { "description": "Heel replacement and golf-shoe spikes.", "rating": 2.5 },
      "reviews": []
    }
  ]
}"#;

/// Parse [`FIXTURE_DOCUMENT`] into a loaded dataset.
pub fn fixture_dataset() -> Dataset {
    Dataset::from_json(FIXTURE_DOCUMENT).expect("fixture document must parse")
}

/// Three-shop collection used by the doc examples: two Tampa shops
/// (4.5 and 3.8) around an unrated shop with an unknown city.
pub fn example_trio() -> Vec<Business> {
    with_ids(vec![
        rated("Ace Shoe Repair", "Tampa", 4.5),
        unknown_city("Best Cobbler"),
        rated("Tampa Soles", "Tampa", 3.8),
    ])
}
