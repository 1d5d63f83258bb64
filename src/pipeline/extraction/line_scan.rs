//! Primary search: alias on a line, value on that line or just below.
//!
//! Lab reports usually print a value on the same line as its label or a
//! few lines under it (label and value split by OCR, units on the next
//! line). The window is bounded so unrelated numbers further down the
//! page are not picked up.

use crate::catalog::{CatalogEntry, ParameterCatalog};
use crate::models::{Gender, ResultSet};

use super::assemble::assemble_result;
use super::number::extract_number;
use super::sanitize::ReportLines;

/// Lines searched after the alias line (window is this plus one).
pub const LOOKAHEAD_LINES: usize = 3;

/// Find a value for one parameter.
///
/// Lines are walked top to bottom; on each line every alias is tried in
/// catalog order. A hit opens a window of the hit line plus
/// `LOOKAHEAD_LINES`; the first number in it wins. An empty window does
/// not stop the search: the next alias and later lines are still tried.
pub fn find_value(entry: &CatalogEntry, lines: &ReportLines) -> Option<f64> {
    for (i, folded) in lines.folded.iter().enumerate() {
        for alias in entry.aliases() {
            if !folded.contains(alias.as_str()) {
                continue;
            }
            let end = (i + LOOKAHEAD_LINES + 1).min(lines.len());
            if let Some(value) = lines.raw[i..end].iter().find_map(|l| extract_number(l)) {
                return Some(value);
            }
        }
    }
    None
}

/// Resolve every parameter not yet in `results` by line scanning.
pub fn scan_lines(
    catalog: &ParameterCatalog,
    lines: &ReportLines,
    gender: Gender,
    results: &mut ResultSet,
) {
    for entry in catalog.iter() {
        if results.contains(entry.name()) {
            continue;
        }
        if let Some(value) = find_value(entry, lines) {
            tracing::debug!(parameter = entry.name(), value, phase = "line_scan", "Parameter resolved");
            results.insert_first(entry.name(), assemble_result(entry.definition(), value, gender));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParameterDefinition;
    use std::collections::BTreeMap;

    fn catalog(params: &[(&str, &[&str])]) -> ParameterCatalog {
        ParameterCatalog::new(
            params
                .iter()
                .map(|(name, aliases)| ParameterDefinition {
                    name: name.to_string(),
                    aliases: aliases.iter().map(|a| a.to_string()).collect(),
                    description: String::new(),
                    low_meaning: String::new(),
                    high_meaning: String::new(),
                    advice: String::new(),
                    normal_range: String::new(),
                    thresholds: BTreeMap::new(),
                })
                .collect(),
        )
        .unwrap()
    }

    fn value_of(text: &str, aliases: &[&str]) -> Option<f64> {
        let cat = catalog(&[("P", aliases)]);
        find_value(cat.get("P").unwrap(), &ReportLines::from_text(text))
    }

    #[test]
    fn value_on_same_line() {
        assert_eq!(value_of("TSH 2.5 mIU/L", &["tsh"]), Some(2.5));
    }

    #[test]
    fn alias_match_is_case_insensitive() {
        assert_eq!(value_of("HEMOGLOBIN 14.1", &["hemoglobin"]), Some(14.1));
    }

    #[test]
    fn value_three_lines_below() {
        let text = "TSH\nmIU/L\nresult\n3.1";
        assert_eq!(value_of(text, &["tsh"]), Some(3.1));
    }

    #[test]
    fn value_four_lines_below_is_out_of_window() {
        let text = "TSH\nmIU/L\nresult\npending\n3.1";
        assert_eq!(value_of(text, &["tsh"]), None);
    }

    #[test]
    fn blank_lines_do_not_count_toward_window() {
        let text = "TSH\n\n\n\n\nunits\n3.1";
        assert_eq!(value_of(text, &["tsh"]), Some(3.1));
    }

    #[test]
    fn window_stops_at_end_of_text() {
        assert_eq!(value_of("header\nTSH", &["tsh"]), None);
    }

    #[test]
    fn earliest_line_with_any_alias_wins() {
        let text = "HGB 13.0\nHemoglobin 15.0";
        assert_eq!(value_of(text, &["hemoglobin", "hgb"]), Some(13.0));
    }

    #[test]
    fn continues_to_later_lines_when_window_is_empty() {
        let text = "TSH\nsee\nbelow\nnotes\nmore\nTSH 1.8";
        assert_eq!(value_of(text, &["tsh"]), Some(1.8));
    }

    #[test]
    fn scan_fills_results_in_catalog_order() {
        let cat = catalog(&[("WBC", &["wbc"]), ("TSH", &["tsh"])]);
        let lines = ReportLines::from_text("TSH 2.0\nWBC 5,000");
        let mut results = ResultSet::new();
        scan_lines(&cat, &lines, Gender::Unknown, &mut results);
        let names: Vec<_> = results.names().collect();
        assert_eq!(names, vec!["WBC", "TSH"]);
        assert_eq!(results.get("WBC").unwrap().value, 5000.0);
    }

    #[test]
    fn scan_skips_already_resolved() {
        let cat = catalog(&[("TSH", &["tsh"])]);
        let lines = ReportLines::from_text("TSH 2.0");
        let mut results = ResultSet::new();
        scan_lines(&cat, &lines, Gender::Unknown, &mut results);
        scan_lines(&cat, &ReportLines::from_text("TSH 9.9"), Gender::Unknown, &mut results);
        assert_eq!(results.get("TSH").unwrap().value, 2.0);
    }
}
