//! Directory listing, detail, top-rated, and metadata handlers.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use soleconnect_core::query::{self, BusinessFilter, Page};
use soleconnect_core::types::{Business, Metadata};

/// Hard ceiling on `per_page`, whatever the client asks for.
const MAX_PER_PAGE: usize = 100;

/// Query string for `GET /api/businesses`. Absent fields mean "no
/// filter"; `page` defaults to 1 and `per_page` to the configured page
/// size. Filter changes reset the page on the client side, so the server
/// just honours whatever page it is asked for.
#[derive(Debug, Deserialize)]
pub(super) struct ListParams {
    city: Option<String>,
    min_rating: Option<f64>,
    max_rating: Option<f64>,
    search: Option<String>,
    page: Option<usize>,
    per_page: Option<usize>,
}

pub(super) async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Page<Business>> {
    let filter = BusinessFilter {
        city: params.city,
        min_rating: params.min_rating.unwrap_or(0.0),
        max_rating: params.max_rating.unwrap_or(5.0),
        term: params.search,
    };
    let filtered = filter.apply(state.dataset.businesses());

    let per_page = params
        .per_page
        .unwrap_or(state.config.directory.per_page)
        .min(MAX_PER_PAGE);
    let page = query::paginate(&filtered, params.page.unwrap_or(1), per_page);
    tracing::debug!(total = page.total, page = page.page, "directory listing");
    Json(page.map(Clone::clone))
}

#[derive(Serialize)]
pub(super) struct BusinessDetail {
    pub business: Business,
    /// Other shops in the same city, up to the configured limit.
    pub related: Vec<Business>,
}

pub(super) async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BusinessDetail>, ApiError> {
    let businesses = state.dataset.businesses();
    let business =
        query::by_id(businesses, &id).ok_or_else(|| ApiError::BusinessNotFound(id.clone()))?;
    let related = query::related(businesses, business, state.config.directory.related_limit)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(BusinessDetail {
        business: business.clone(),
        related,
    }))
}

#[derive(Debug, Deserialize)]
pub(super) struct TopRatedParams {
    limit: Option<usize>,
}

pub(super) async fn top_rated(
    State(state): State<AppState>,
    Query(params): Query<TopRatedParams>,
) -> Json<Vec<Business>> {
    let limit = params.limit.unwrap_or(state.config.directory.top_rated_limit);
    Json(
        query::top_rated(state.dataset.businesses(), limit)
            .into_iter()
            .cloned()
            .collect(),
    )
}

pub(super) async fn metadata(State(state): State<AppState>) -> Json<Metadata> {
    Json(state.dataset.metadata().clone())
}
