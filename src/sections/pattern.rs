//! Pattern section - warns about common, sequential and repeated patterns.

use super::{SectionInput, SectionResult};
use crate::types::FeedbackItem;

/// Emits a warning for each detected pattern, nothing otherwise.
pub fn pattern_warning_section(input: &SectionInput<'_>) -> SectionResult {
    let checks = input.checks;
    [
        (checks.has_common_pattern, "Avoid common words or patterns"),
        (checks.has_sequential, "Avoid sequential characters"),
        (checks.has_repeated, "Avoid repeated characters"),
    ]
    .into_iter()
    .filter(|(found, _)| *found)
    .map(|(_, message)| FeedbackItem::warning(message))
    .collect()
}
