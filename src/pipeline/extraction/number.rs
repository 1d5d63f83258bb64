//! Numeric value recovery from short, OCR-damaged text fragments.

use std::sync::LazyLock;

use regex::Regex;

static PERCENT_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-?\d+(?:\.\d+)?)\s*%").unwrap());

static PLAIN_VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+(?:\.\d+)?").unwrap());

/// Recover a number from `fragment`.
///
/// Percent readings win over any other number in the fragment. Returns
/// `None` when nothing numeric is present or the match does not parse.
pub fn extract_number(fragment: &str) -> Option<f64> {
    let cleaned = strip_thousands_separators(&normalize_glyphs(fragment));

    if let Some(caps) = PERCENT_VALUE.captures(&cleaned) {
        return caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok());
    }

    // `\d` is Unicode-aware but `f64::from_str` only takes ASCII digits, so a
    // first match in another script (e.g. Arabic-Indic) yields `None`.
    PLAIN_VALUE
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Drop curly quotes and map dash-like glyphs to ASCII minus.
fn normalize_glyphs(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}'))
        .map(|c| match c {
            '\u{2014}' | '\u{2212}' => '-',
            other => other,
        })
        .collect()
}

/// Remove a comma sitting between a digit and exactly three digits that
/// end a word ("12,345" -> "12345"). Other commas are left alone.
fn strip_thousands_separators(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == ',' && is_group_separator(&chars, i) {
            continue;
        }
        out.push(c);
    }
    out
}

fn is_group_separator(chars: &[char], comma: usize) -> bool {
    if comma == 0 || !chars[comma - 1].is_ascii_digit() {
        return false;
    }
    let group = &chars[comma + 1..];
    if group.len() < 3 || !group[..3].iter().all(|c| c.is_ascii_digit()) {
        return false;
    }
    // Word boundary after the three digits.
    group
        .get(3)
        .map_or(true, |&next| !(next.is_alphanumeric() || next == '_'))
}
