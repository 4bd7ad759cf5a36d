//! City aggregation handler.

use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use soleconnect_core::query::{self, CityCount};

#[derive(Serialize)]
pub(super) struct CitiesResponse {
    /// Sorted unique city names for the filter dropdown.
    cities: Vec<String>,
    /// Count rows, most businesses first.
    counts: Vec<CityCount>,
}

pub(super) async fn cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    let businesses = state.dataset.businesses();
    Json(CitiesResponse {
        cities: query::cities(businesses),
        counts: query::city_counts(businesses),
    })
}
