//! Analysis API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`; uploads are also accepted at `/upload`.
//!
//! Layer stack (outermost → innermost):
//! 1. CORS → 2. Body size limit → Handler

use axum::extract::DefaultBodyLimit;
use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the CORS layer for the configured origins. `*` allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    let allow_origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|o| HeaderValue::from_str(o.trim_end_matches('/')))
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Build the analysis API router.
///
/// Endpoint handlers use `State<ApiContext>` (provided via `with_state`).
pub fn build_router(ctx: ApiContext, cors: CorsLayer, max_body_bytes: usize) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/parameters", get(endpoints::parameters::list))
        .route("/analyze", post(endpoints::analyze::analyze))
        .route("/upload", post(endpoints::analyze::upload));

    // `/upload` at the root is the path the hosted front-end posts to.
    Router::new()
        .nest("/api", api)
        .route("/upload", post(endpoints::analyze::upload))
        .fallback(endpoints::not_found)
        .with_state(ctx)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors)
}
