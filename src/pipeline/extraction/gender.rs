//! Gender inference from report header text.
//!
//! Precision over recall: an unknown result only means default ranges
//! are used, while a wrong guess misclassifies gendered parameters.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Gender, GenderSource};

static MALE_MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\bsex[:\s]*male\b").unwrap(),
        Regex::new(r"(?i)\bsex[:\s]*m\b").unwrap(),
        Regex::new(r"(?i)\bmale\b").unwrap(),
    ]
});

static FEMALE_MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\bsex[:\s]*female\b").unwrap(),
        Regex::new(r"(?i)\bsex[:\s]*f\b").unwrap(),
        Regex::new(r"(?i)\bfemale\b").unwrap(),
    ]
});

// Demographic shorthand such as "M 25Y" or "F,30". Case-sensitive: a
// lower-case "m" or "f" next to a number is usually a unit.
static MALE_SHORTHAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bM\b[\s,]\d{1,2}\b").unwrap());
static FEMALE_SHORTHAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bF\b[\s,]\d{1,2}\b").unwrap());

/// Infer gender from free text. Male markers are checked before female
/// markers, and explicit markers before shorthand.
pub fn detect_gender(text: &str) -> (Gender, GenderSource) {
    if text.is_empty() {
        return (Gender::Unknown, GenderSource::None);
    }

    if MALE_MARKERS.iter().any(|re| re.is_match(text)) {
        return (Gender::Male, GenderSource::Ocr);
    }
    if FEMALE_MARKERS.iter().any(|re| re.is_match(text)) {
        return (Gender::Female, GenderSource::Ocr);
    }
    if MALE_SHORTHAND.is_match(text) {
        return (Gender::Male, GenderSource::Ocr);
    }
    if FEMALE_SHORTHAND.is_match(text) {
        return (Gender::Female, GenderSource::Ocr);
    }

    (Gender::Unknown, GenderSource::Ocr)
}

/// A valid caller hint wins; otherwise infer from the text.
pub fn resolve_gender(hint: Option<&str>, text: &str) -> (Gender, GenderSource) {
    match hint.and_then(Gender::from_hint) {
        Some(gender) => (gender, GenderSource::User),
        None => detect_gender(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_unknown_none() {
        assert_eq!(detect_gender(""), (Gender::Unknown, GenderSource::None));
    }

    #[test]
    fn whitespace_only_is_unknown_ocr() {
        assert_eq!(detect_gender("  \n "), (Gender::Unknown, GenderSource::Ocr));
    }

    #[test]
    fn sex_field_female() {
        assert_eq!(
            detect_gender("Name: Jane Doe\nSex: Female"),
            (Gender::Female, GenderSource::Ocr)
        );
    }

    #[test]
    fn sex_field_abbreviated() {
        assert_eq!(detect_gender("SEX: M"), (Gender::Male, GenderSource::Ocr));
        assert_eq!(detect_gender("sex:f"), (Gender::Female, GenderSource::Ocr));
    }

    #[test]
    fn female_word_is_not_male() {
        assert_eq!(detect_gender("Gender FEMALE"), (Gender::Female, GenderSource::Ocr));
    }

    #[test]
    fn standalone_male_word() {
        assert_eq!(
            detect_gender("Patient: John, male, 45 years"),
            (Gender::Male, GenderSource::Ocr)
        );
    }

    #[test]
    fn male_marker_checked_first() {
        assert_eq!(
            detect_gender("male ward, female nurse"),
            (Gender::Male, GenderSource::Ocr)
        );
    }

    #[test]
    fn shorthand_age_markers() {
        assert_eq!(detect_gender("Age/Sex: M 25Y"), (Gender::Male, GenderSource::Ocr));
        assert_eq!(detect_gender("F,30"), (Gender::Female, GenderSource::Ocr));
    }

    #[test]
    fn shorthand_is_case_sensitive() {
        assert_eq!(detect_gender("m 25"), (Gender::Unknown, GenderSource::Ocr));
        assert_eq!(detect_gender("f 30"), (Gender::Unknown, GenderSource::Ocr));
    }

    #[test]
    fn shorthand_needs_short_age() {
        assert_eq!(detect_gender("M 250"), (Gender::Unknown, GenderSource::Ocr));
    }

    #[test]
    fn nothing_matches_is_unknown_ocr() {
        assert_eq!(
            detect_gender("Hemoglobin 13.5 g/dL"),
            (Gender::Unknown, GenderSource::Ocr)
        );
    }

    #[test]
    fn valid_hint_overrides_text() {
        assert_eq!(
            resolve_gender(Some("Female"), "Sex: Male"),
            (Gender::Female, GenderSource::User)
        );
    }

    #[test]
    fn invalid_hint_is_ignored() {
        assert_eq!(
            resolve_gender(Some("other"), "Sex: Male"),
            (Gender::Male, GenderSource::Ocr)
        );
        assert_eq!(resolve_gender(None, ""), (Gender::Unknown, GenderSource::None));
    }
}
