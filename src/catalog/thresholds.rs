//! Gender-aware reference range lookup.

use crate::models::{Gender, ParameterDefinition, ReferenceRange, DEFAULT_THRESHOLD_KEY};

/// Resolve the normal range for `def` given the active gender.
///
/// Order: gender-keyed entry (unless gender is unknown), then `default`,
/// then any entry the table holds. `None` only for an empty table.
pub fn resolve_threshold(def: &ParameterDefinition, gender: Gender) -> Option<ReferenceRange> {
    if gender != Gender::Unknown {
        if let Some(range) = def.thresholds.get(gender.as_str()) {
            return Some(*range);
        }
    }
    if let Some(range) = def.thresholds.get(DEFAULT_THRESHOLD_KEY) {
        return Some(*range);
    }
    // Last resort for tables keyed only by something unexpected.
    def.thresholds.values().next().copied()
}
