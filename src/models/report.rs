use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::enums::{Classification, Gender, GenderSource};

/// Meaning text for a value inside its range.
pub const WITHIN_RANGE_MEANING: &str = "Within normal range.";
/// Meaning text when a value was found but no range applies.
pub const VALUE_FOUND_MEANING: &str = "Value found.";
/// Summary when no parameter is out of range.
pub const ALL_NORMAL_SUMMARY: &str = "All parameters are within normal ranges.";

/// One recovered and classified measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub value: f64,
    pub normal_range: String,
    pub description: String,
    pub classification: Classification,
    pub meaning: String,
    pub advice: String,
}

/// Results keyed by canonical parameter name, in resolution order.
///
/// A name appears at most once; the first insert wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: Vec<(String, ExtractionResult)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless `name` is already resolved. Returns whether it was inserted.
    pub fn insert_first(&mut self, name: &str, result: ExtractionResult) -> bool {
        if self.contains(name) {
            return false;
        }
        self.entries.push((name.to_string(), result));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn get(&self, name: &str) -> Option<&ExtractionResult> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtractionResult)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, result) in &self.entries {
            map.serialize_entry(name, result)?;
        }
        map.end()
    }
}

/// Complete outcome of analysing one report text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportAnalysis {
    pub detected_gender: Gender,
    pub gender_source: GenderSource,
    pub parsed_results: ResultSet,
    pub summary: String,
}
