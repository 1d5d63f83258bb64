//! Lab value extraction from OCR text.
//!
//! Two-phase search over a report: a conservative line scanner first,
//! then a permissive character-window fallback for whatever is left.

pub mod assemble;
pub mod fallback;
pub mod gender;
pub mod line_scan;
pub mod medical_correction;
pub mod number;
pub mod orchestrator;
pub mod sanitize;

pub use assemble::{assemble_result, classify, summarize};
pub use gender::{detect_gender, resolve_gender};
pub use number::extract_number;
pub use orchestrator::*;
pub use sanitize::ReportLines;
