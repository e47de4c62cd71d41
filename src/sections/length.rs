//! Length section - checks the mode's minimum length.

use super::{SectionInput, SectionResult};
use crate::types::FeedbackItem;

/// Always emits exactly one item stating the mode's minimum.
pub fn length_section(input: &SectionInput<'_>) -> SectionResult {
    let policy = input.mode.policy();
    let valid = if input.mode.is_business() {
        input.checks.length_for_mode
    } else {
        input.checks.length_ok
    };
    vec![FeedbackItem::new(
        format!("{}+ characters long", policy.min_length),
        valid,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::PasswordChecks;
    use crate::mode::Mode;

    fn run(pwd: &str, mode: Mode) -> SectionResult {
        let checks = PasswordChecks::inspect(pwd, &mode.policy());
        length_section(&SectionInput {
            checks: &checks,
            mode,
            score: 0,
        })
    }

    #[test]
    fn test_length_section_too_short() {
        let result = run("Short1!", Mode::Personal);
        assert_eq!(result, vec![FeedbackItem::new("8+ characters long", false)]);
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let result = run("12345678", Mode::Personal);
        assert!(result[0].valid);
    }

    #[test]
    fn test_length_section_business_minimum() {
        let result = run("LongEnough1!", Mode::Business);
        assert_eq!(result, vec![FeedbackItem::new("12+ characters long", true)]);

        let result = run("Short123!", Mode::Business);
        assert!(!result[0].valid);
    }
}
