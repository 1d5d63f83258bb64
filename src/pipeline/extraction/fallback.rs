//! Secondary search: character proximity over the raw text.
//!
//! Catches layouts the line scanner misses (value far from its label,
//! or label and value merged into one dense line). Runs only for
//! parameters the line scanner left unresolved.

use regex::Regex;

use crate::catalog::{CatalogEntry, ParameterCatalog};
use crate::models::{Gender, ResultSet};

use super::assemble::assemble_result;
use super::number::extract_number;

/// Maximum characters allowed between an alias and its value token.
pub const WINDOW_CHARS: usize = 80;

/// Compile the proximity pattern for one alias: the alias (any case),
/// up to `WINDOW_CHARS` characters, then a numeric-looking token.
pub fn proximity_pattern(alias: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?i){}[\s\S]{{0,{}}}?([-\d.,%]+)",
        regex::escape(alias),
        WINDOW_CHARS
    ))
}

/// Try each alias in order; the first whose token parses wins.
pub fn find_value(entry: &CatalogEntry, text: &str) -> Option<f64> {
    entry.proximity_patterns().iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|token| extract_number(token.as_str()))
    })
}

/// Resolve every parameter not yet in `results` by proximity search.
pub fn match_windowed(
    catalog: &ParameterCatalog,
    text: &str,
    gender: Gender,
    results: &mut ResultSet,
) {
    for entry in catalog.iter() {
        if results.contains(entry.name()) {
            continue;
        }
        if let Some(value) = find_value(entry, text) {
            tracing::debug!(parameter = entry.name(), value, phase = "fallback", "Parameter resolved");
            results.insert_first(entry.name(), assemble_result(entry.definition(), value, gender));
        }
    }
}
