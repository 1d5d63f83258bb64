//! Turns a recovered value into a classified, explained result.

use crate::catalog::resolve_threshold;
use crate::models::{
    Classification, ExtractionResult, Gender, ParameterDefinition, ReferenceRange, ResultSet,
    ALL_NORMAL_SUMMARY, VALUE_FOUND_MEANING, WITHIN_RANGE_MEANING,
};

/// Compare `value` to an inclusive range. No range → indeterminate.
pub fn classify(value: f64, range: Option<ReferenceRange>) -> Classification {
    match range {
        None => Classification::Indeterminate,
        Some(r) if value < r.low => Classification::Below,
        Some(r) if value > r.high => Classification::Above,
        Some(_) => Classification::Within,
    }
}

pub fn assemble_result(def: &ParameterDefinition, value: f64, gender: Gender) -> ExtractionResult {
    let classification = classify(value, resolve_threshold(def, gender));
    let meaning = match classification {
        Classification::Below => def.low_meaning.clone(),
        Classification::Above => def.high_meaning.clone(),
        Classification::Within => WITHIN_RANGE_MEANING.to_string(),
        Classification::Indeterminate => VALUE_FOUND_MEANING.to_string(),
    };

    ExtractionResult {
        value,
        normal_range: def.normal_range.clone(),
        description: def.description.clone(),
        classification,
        meaning,
        advice: def.advice.clone(),
    }
}

/// One-line summary: out-of-range parameters joined with "; ", or the
/// all-normal message. Indeterminate results are not issues.
pub fn summarize(results: &ResultSet) -> String {
    let issues: Vec<String> = results
        .iter()
        .filter(|(_, r)| {
            matches!(r.classification, Classification::Below | Classification::Above)
        })
        .map(|(name, r)| format!("{name}: {}", r.meaning))
        .collect();

    if issues.is_empty() {
        ALL_NORMAL_SUMMARY.to_string()
    } else {
        format!("Issues: {}", issues.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn hemoglobin() -> ParameterDefinition {
        let mut thresholds = BTreeMap::new();
        thresholds.insert("male".to_string(), ReferenceRange::new(13.8, 17.2));
        thresholds.insert("female".to_string(), ReferenceRange::new(12.1, 15.1));
        thresholds.insert("default".to_string(), ReferenceRange::new(12.1, 17.2));
        ParameterDefinition {
            name: "Hemoglobin".into(),
            aliases: vec!["hemoglobin".into()],
            description: "Carries oxygen.".into(),
            low_meaning: "Low hemoglobin.".into(),
            high_meaning: "High hemoglobin.".into(),
            advice: "Eat iron-rich foods.".into(),
            normal_range: "12.1-17.2 g/dL".into(),
            thresholds,
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let r = Some(ReferenceRange::new(12.1, 15.1));
        assert_eq!(classify(12.1, r), Classification::Within);
        assert_eq!(classify(15.1, r), Classification::Within);
        assert_eq!(classify(12.0, r), Classification::Below);
        assert_eq!(classify(15.2, r), Classification::Above);
    }

    #[test]
    fn no_range_is_indeterminate() {
        assert_eq!(classify(1.0, None), Classification::Indeterminate);
    }

    #[test]
    fn gender_changes_classification() {
        let def = hemoglobin();
        assert_eq!(assemble_result(&def, 13.0, Gender::Male).classification, Classification::Below);
        assert_eq!(assemble_result(&def, 13.0, Gender::Female).classification, Classification::Within);
    }

    #[test]
    fn texts_copied_from_definition() {
        let result = assemble_result(&hemoglobin(), 11.5, Gender::Female);
        assert_eq!(result.value, 11.5);
        assert_eq!(result.meaning, "Low hemoglobin.");
        assert_eq!(result.advice, "Eat iron-rich foods.");
        assert_eq!(result.description, "Carries oxygen.");
        assert_eq!(result.normal_range, "12.1-17.2 g/dL");
    }

    #[test]
    fn within_meaning_is_fixed_text() {
        let result = assemble_result(&hemoglobin(), 14.0, Gender::Unknown);
        assert_eq!(result.meaning, WITHIN_RANGE_MEANING);
    }

    #[test]
    fn empty_table_reports_value_found() {
        let mut def = hemoglobin();
        def.thresholds.clear();
        let result = assemble_result(&def, 14.0, Gender::Male);
        assert_eq!(result.classification, Classification::Indeterminate);
        assert_eq!(result.meaning, VALUE_FOUND_MEANING);
    }

    #[test]
    fn summary_lists_only_out_of_range() {
        let def = hemoglobin();
        let mut indeterminate = def.clone();
        indeterminate.thresholds.clear();

        let mut results = ResultSet::new();
        results.insert_first("Hemoglobin", assemble_result(&def, 11.0, Gender::Female));
        results.insert_first("Ferritin", assemble_result(&indeterminate, 80.0, Gender::Female));
        results.insert_first("Other", assemble_result(&def, 14.0, Gender::Female));

        assert_eq!(summarize(&results), "Issues: Hemoglobin: Low hemoglobin.");
    }

    #[test]
    fn summary_joins_with_semicolons() {
        let def = hemoglobin();
        let mut results = ResultSet::new();
        results.insert_first("A", assemble_result(&def, 1.0, Gender::Male));
        results.insert_first("B", assemble_result(&def, 99.0, Gender::Male));
        assert_eq!(
            summarize(&results),
            "Issues: A: Low hemoglobin.; B: High hemoglobin."
        );
    }

    #[test]
    fn empty_results_are_all_normal() {
        assert_eq!(summarize(&ResultSet::new()), ALL_NORMAL_SUMMARY);
    }
}
