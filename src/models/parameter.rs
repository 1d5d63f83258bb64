use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Inclusive normal range. Serialized as `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct ReferenceRange {
    pub low: f64,
    pub high: f64,
}

impl ReferenceRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

impl From<(f64, f64)> for ReferenceRange {
    fn from((low, high): (f64, f64)) -> Self {
        Self { low, high }
    }
}

impl From<ReferenceRange> for (f64, f64) {
    fn from(range: ReferenceRange) -> Self {
        (range.low, range.high)
    }
}

/// Threshold table key for the gender-neutral range.
pub const DEFAULT_THRESHOLD_KEY: &str = "default";

/// One measurable lab parameter: how to recognise it and how to explain it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterDefinition {
    /// Canonical name, unique across the catalog (e.g. "Hemoglobin").
    pub name: String,
    /// Lower-case substrings that identify the parameter's label.
    pub aliases: Vec<String>,
    pub description: String,
    pub low_meaning: String,
    pub high_meaning: String,
    pub advice: String,
    /// Human-readable range label shown to the patient.
    pub normal_range: String,
    /// Keyed by `male`, `female`, `default`; other keys are tolerated.
    #[serde(default)]
    pub thresholds: BTreeMap<String, ReferenceRange>,
}
