//! Report analysis endpoints.
//!
//! `POST /api/analyze` takes OCR text as JSON. `POST /api/upload` takes
//! the OCR output as a multipart `file` plus an optional `user_gender`
//! form field. Both return the same `AnalysisResponse`.

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{AnalysisResponse, AnalyzeRequest, ApiContext};

/// Multipart field carrying the report text.
const FILE_FIELD: &str = "file";
/// Multipart field carrying the optional gender hint.
const GENDER_FIELD: &str = "user_gender";

/// `POST /api/analyze`: analyze OCR text supplied inline.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Json(request) = payload?;
    let response = run_analysis(ctx, request.text, request.user_gender, request.filename).await?;
    Ok(Json(response))
}

/// `POST /api/upload`: analyze an uploaded OCR text file.
///
/// Non-UTF-8 bytes are replaced rather than rejected; OCR output of
/// unknown provenance is common.
pub async fn upload(
    State(ctx): State<ApiContext>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let mut multipart = multipart?;
    let mut file: Option<(Option<String>, String)> = None;
    let mut user_gender: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some(FILE_FIELD) => {
                let filename = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;
                file = Some((filename, String::from_utf8_lossy(&bytes).into_owned()));
            }
            Some(GENDER_FIELD) => {
                user_gender = Some(field.text().await?);
            }
            _ => {}
        }
    }

    let (filename, text) = file.ok_or(ApiError::MissingField(FILE_FIELD))?;
    let response = run_analysis(ctx, text, user_gender, filename).await?;
    Ok(Json(response))
}

/// Extraction is CPU-bound; keep it off the async workers.
async fn run_analysis(
    ctx: ApiContext,
    text: String,
    user_gender: Option<String>,
    filename: Option<String>,
) -> Result<AnalysisResponse, ApiError> {
    tracing::debug!(bytes = text.len(), filename = filename.as_deref(), "Analysis requested");
    tokio::task::spawn_blocking(move || ctx.analyze(text, user_gender.as_deref(), filename))
        .await
        .map_err(|e| ApiError::Internal(format!("analysis task failed: {e}")))
}
