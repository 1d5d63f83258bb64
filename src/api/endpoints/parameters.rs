//! Catalog listing endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::types::{ApiContext, ParameterSummary};

/// `GET /api/parameters`: every recognised parameter, in catalog order.
pub async fn list(State(ctx): State<ApiContext>) -> Json<Vec<ParameterSummary>> {
    Json(ctx.catalog.iter().map(ParameterSummary::from).collect())
}
