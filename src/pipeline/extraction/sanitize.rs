/// Line-oriented view of report text, as consumed by the line scanner.
///
/// `raw` holds trimmed, non-empty lines; `folded` is the same lines in
/// lower case for alias matching. Both have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportLines {
    pub raw: Vec<String>,
    pub folded: Vec<String>,
}

impl ReportLines {
    pub fn from_text(text: &str) -> Self {
        let raw: Vec<String> = split_report_lines(text);
        let folded = raw.iter().map(|l| l.to_lowercase()).collect();
        Self { raw, folded }
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Split OCR output into trimmed, non-empty lines.
/// Bare `\r` counts as a line break; so do the Unicode line separators
/// OCR engines occasionally emit.
pub fn split_report_lines(text: &str) -> Vec<String> {
    text.split(is_line_break)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0B}' // Vertical tab
            | '\u{0C}' // Form feed
            | '\u{1C}'
            | '\u{1D}'
            | '\u{1E}'
            | '\u{85}' // Next line
            | '\u{2028}' // Line separator
            | '\u{2029}' // Paragraph separator
    )
}
