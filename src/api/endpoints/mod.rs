//! Endpoint handlers. Every handler takes `State<ApiContext>`.

pub mod analyze;
pub mod health;
pub mod parameters;

use crate::api::error::ApiError;

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("No such endpoint".into())
}
