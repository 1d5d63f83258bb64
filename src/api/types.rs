//! Shared types for the analysis API.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogEntry, ParameterCatalog};
use crate::models::{Gender, GenderSource, ReportAnalysis, ResultSet};
use crate::pipeline::extraction::{analyze_report, ExtractionOptions};

// ═══════════════════════════════════════════════════════════
// API context: shared state for the router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes. The catalog is read-only, so no
/// locking is needed across requests.
#[derive(Clone)]
pub struct ApiContext {
    pub catalog: Arc<ParameterCatalog>,
    pub options: ExtractionOptions,
}

impl ApiContext {
    pub fn new(catalog: Arc<ParameterCatalog>, options: ExtractionOptions) -> Self {
        Self { catalog, options }
    }

    /// Run one analysis and wrap it in the response envelope.
    pub fn analyze(
        &self,
        text: String,
        user_gender: Option<&str>,
        filename: Option<String>,
    ) -> AnalysisResponse {
        let analysis = analyze_report(&self.catalog, &text, user_gender, self.options);
        AnalysisResponse::new(analysis, text, filename)
    }
}

// ═══════════════════════════════════════════════════════════
// Request / response bodies
// ═══════════════════════════════════════════════════════════

/// `POST /api/analyze` body.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub user_gender: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Envelope returned by both analyze and upload.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: String,
    pub analyzed_at: String,
    pub filename: Option<String>,
    pub detected_gender: Gender,
    pub gender_source: GenderSource,
    pub raw_text: String,
    pub parsed_results: ResultSet,
    pub summary: String,
}

impl AnalysisResponse {
    pub fn new(analysis: ReportAnalysis, raw_text: String, filename: Option<String>) -> Self {
        Self {
            analysis_id: uuid::Uuid::new_v4().to_string(),
            analyzed_at: chrono::Utc::now().to_rfc3339(),
            filename,
            detected_gender: analysis.detected_gender,
            gender_source: analysis.gender_source,
            raw_text,
            parsed_results: analysis.parsed_results,
            summary: analysis.summary,
        }
    }
}

/// One row of `GET /api/parameters`.
#[derive(Debug, Serialize)]
pub struct ParameterSummary {
    pub name: String,
    pub aliases: Vec<String>,
    pub normal_range: String,
    pub description: String,
}

impl From<&CatalogEntry> for ParameterSummary {
    fn from(entry: &CatalogEntry) -> Self {
        let def = entry.definition();
        Self {
            name: def.name.clone(),
            aliases: entry.aliases().to_vec(),
            normal_range: def.normal_range.clone(),
            description: def.description.clone(),
        }
    }
}
