//! Route table for the JSON API.

mod businesses;
mod cities;
mod contact;
mod content;
mod health;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/metadata", get(businesses::metadata))
        .route("/api/businesses", get(businesses::list))
        .route("/api/businesses/{id}", get(businesses::detail))
        .route("/api/top-rated", get(businesses::top_rated))
        .route("/api/cities", get(cities::cities))
        .route("/api/blog", get(content::blog_index))
        .route("/api/blog/{slug}", get(content::blog_post))
        .route("/api/faq", get(content::faq_index))
        .route("/api/contact", post(contact::submit))
        .with_state(state)
}
