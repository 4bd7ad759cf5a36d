//! API error type.
//!
//! "Not found" and validation failures are normal outcomes rendered as
//! JSON error bodies, never panics. Anything else simply cannot happen
//! here: the dataset is immutable and queries have no failure modes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no business with id {0:?}")]
    BusinessNotFound(String),
    #[error("no blog post with slug {0:?}")]
    PostNotFound(String),
    #[error("invalid contact message: {0}")]
    InvalidContact(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BusinessNotFound(_) | ApiError::PostNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidContact(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
