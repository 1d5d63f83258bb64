//! Report analysis: gender resolution, line scan, windowed fallback,
//! summary. Pure and synchronous; the only shared state is the
//! read-only catalog.

use crate::catalog::ParameterCatalog;
use crate::models::{Gender, ReportAnalysis, ResultSet};

use super::assemble::summarize;
use super::fallback::match_windowed;
use super::gender::resolve_gender;
use super::line_scan::scan_lines;
use super::medical_correction::TermDictionary;
use super::sanitize::ReportLines;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionOptions {
    /// Fuzzy-correct misspelled parameter labels before scanning.
    pub correct_terms: bool,
}

/// Extract and classify every catalog parameter found in `text`.
///
/// Line scan results always take precedence; the windowed fallback only
/// sees parameters the line scan could not resolve.
pub fn parse_medical_report(
    catalog: &ParameterCatalog,
    text: &str,
    gender: Gender,
    options: ExtractionOptions,
) -> ResultSet {
    let mut results = ResultSet::new();
    if text.is_empty() {
        return results;
    }

    let corrected;
    let text = if options.correct_terms {
        corrected = TermDictionary::from_catalog(catalog).correct_text(text);
        corrected.as_str()
    } else {
        text
    };

    let lines = ReportLines::from_text(text);
    scan_lines(catalog, &lines, gender, &mut results);
    let from_lines = results.len();

    match_windowed(catalog, text, gender, &mut results);

    tracing::debug!(
        lines = lines.len(),
        line_scan = from_lines,
        fallback = results.len() - from_lines,
        "Report parsed"
    );
    results
}

/// Full analysis of one report: resolve gender (caller hint first),
/// extract parameters, summarise.
pub fn analyze_report(
    catalog: &ParameterCatalog,
    text: &str,
    gender_hint: Option<&str>,
    options: ExtractionOptions,
) -> ReportAnalysis {
    let (gender, source) = resolve_gender(gender_hint, text);
    let parsed_results = parse_medical_report(catalog, text, gender, options);
    let summary = summarize(&parsed_results);

    tracing::info!(
        gender = gender.as_str(),
        gender_source = source.as_str(),
        parameters = parsed_results.len(),
        "Report analyzed"
    );

    ReportAnalysis {
        detected_gender: gender,
        gender_source: source,
        parsed_results,
        summary,
    }
}
