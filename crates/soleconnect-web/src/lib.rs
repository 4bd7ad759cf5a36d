//! soleconnect-web - axum JSON API over the directory core.
//!
//! One route per page of the site:
//!
//! | Route | Serves |
//! |---|---|
//! | `GET /health` | liveness |
//! | `GET /api/metadata` | dataset summary, as stored |
//! | `GET /api/businesses` | filtered + paginated listing |
//! | `GET /api/businesses/{id}` | detail plus same-city suggestions |
//! | `GET /api/top-rated` | home-page highlight |
//! | `GET /api/cities` | city list + per-city counts |
//! | `GET /api/blog`, `GET /api/blog/{slug}` | editorial posts |
//! | `GET /api/faq` | FAQ categories |
//! | `POST /api/contact` | demo contact form (validated, never stored) |
//!
//! All handlers read the immutable dataset from [`AppState`]; there is no
//! write path.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;

use std::net::SocketAddr;

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
