//! Post-OCR correction of parameter labels.
//!
//! Fuzzy-matches words against the single-word aliases of the active
//! catalog so that OCR misspellings ("Hemog1obin", "Potasium") still hit
//! the line scanner. Only corrects when confidence is high: edit distance
//! <= 2, word at least 5 characters, and a unique best match.

use crate::catalog::ParameterCatalog;

const MIN_WORD_CHARS: usize = 5;
const MAX_DISTANCE: u32 = 2;

/// Sorted, deduplicated correction targets.
#[derive(Debug, Clone, Default)]
pub struct TermDictionary {
    terms: Vec<String>,
}

impl TermDictionary {
    /// Every alias that is a single alphanumeric word of usable length.
    pub fn from_catalog(catalog: &ParameterCatalog) -> Self {
        Self::from_terms(
            catalog
                .iter()
                .flat_map(|entry| entry.aliases().iter().cloned())
                .filter(|alias| {
                    alias.chars().count() >= MIN_WORD_CHARS
                        && alias.chars().all(char::is_alphanumeric)
                }),
        )
    }

    pub fn from_terms(terms: impl IntoIterator<Item = String>) -> Self {
        let mut terms: Vec<String> = terms.into_iter().map(|t| t.to_lowercase()).collect();
        terms.sort();
        terms.dedup();
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Correct every near-miss word in `text`, leaving all else untouched.
    pub fn correct_text(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut word_buf = String::new();

        for ch in text.chars() {
            if ch.is_alphanumeric() {
                word_buf.push(ch);
            } else {
                if !word_buf.is_empty() {
                    result.push_str(&self.correct_word(&word_buf));
                    word_buf.clear();
                }
                result.push(ch);
            }
        }

        // Handle last word
        if !word_buf.is_empty() {
            result.push_str(&self.correct_word(&word_buf));
        }

        result
    }

    fn correct_word(&self, word: &str) -> String {
        let word_len = word.chars().count();
        if word_len < MIN_WORD_CHARS {
            return word.to_string();
        }

        let lower = word.to_lowercase();
        if self.terms.binary_search(&lower).is_ok() {
            return word.to_string();
        }

        let mut best_term: Option<&str> = None;
        let mut best_distance = MAX_DISTANCE + 1;
        let mut ambiguous = false;

        for term in &self.terms {
            let len_diff = word_len.abs_diff(term.chars().count());
            if len_diff > MAX_DISTANCE as usize {
                continue;
            }

            let dist = edit_distance(&lower, term);
            if dist < best_distance {
                best_distance = dist;
                best_term = Some(term.as_str());
                ambiguous = false;
            } else if dist == best_distance && best_term.is_some() {
                ambiguous = true;
            }
        }

        match best_term {
            Some(term) if !ambiguous => preserve_case(word, term),
            _ => word.to_string(),
        }
    }
}

/// Preserve the original word's capitalization pattern when applying correction.
fn preserve_case(original: &str, correction: &str) -> String {
    if original.chars().all(|c| c.is_uppercase() || !c.is_alphabetic()) {
        return correction.to_uppercase();
    }

    let first_upper = original.chars().next().is_some_and(|c| c.is_uppercase());
    if first_upper {
        let mut chars = correction.chars();
        match chars.next() {
            Some(c) => {
                let mut s = c.to_uppercase().to_string();
                s.extend(chars);
                s
            }
            None => correction.to_string(),
        }
    } else {
        correction.to_string()
    }
}

/// Compute Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> u32 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n as u32;
    }
    if n == 0 {
        return m as u32;
    }

    let mut prev: Vec<u32> = (0..=n as u32).collect();
    let mut curr = vec![0u32; n + 1];

    for (i, &a_ch) in a_chars.iter().enumerate() {
        curr[0] = (i + 1) as u32;
        for (j, &b_ch) in b_chars.iter().enumerate() {
            let cost = if a_ch == b_ch { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
