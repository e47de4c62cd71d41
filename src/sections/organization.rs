//! Organization section - business accounts only.

use super::{SectionInput, SectionResult};
use crate::types::{FeedbackCategory, FeedbackItem, PasswordStrength};

/// Reports whether the score meets organizational requirements, and flags
/// passwords missing the business length or special character.
pub fn organization_section(input: &SectionInput<'_>) -> SectionResult {
    if !input.mode.is_business() {
        return Vec::new();
    }

    let meets = input.score >= PasswordStrength::STRONG_THRESHOLD;
    let category = if meets {
        FeedbackCategory::Success
    } else {
        FeedbackCategory::Error
    };
    let mut items =
        vec![FeedbackItem::new("Meets organizational requirements", meets).with_category(category)];

    if !(input.checks.length_for_mode && input.checks.has_special) {
        items.push(FeedbackItem::error(
            "More complex password required for business accounts",
        ));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::PasswordChecks;
    use crate::mode::Mode;

    fn run(pwd: &str, mode: Mode, score: u8) -> SectionResult {
        let checks = PasswordChecks::inspect(pwd, &mode.policy());
        organization_section(&SectionInput {
            checks: &checks,
            mode,
            score,
        })
    }

    #[test]
    fn test_organization_section_skipped_for_personal() {
        assert!(run("short", Mode::Personal, 10).is_empty());
    }

    #[test]
    fn test_organization_section_meets_requirements() {
        let result = run("Xk9!mQ2pLr7z", Mode::Business, 85);
        assert_eq!(result.len(), 1);
        assert!(result[0].valid);
        assert_eq!(result[0].category, FeedbackCategory::Success);
    }

    #[test]
    fn test_organization_section_requires_complexity() {
        let result = run("NoSpecialChars123", Mode::Business, 60);
        assert_eq!(result.len(), 2);
        assert!(!result[0].valid);
        assert_eq!(result[0].category, FeedbackCategory::Error);
        assert_eq!(
            result[1],
            FeedbackItem::error("More complex password required for business accounts")
        );
    }

    #[test]
    fn test_organization_section_threshold_is_inclusive() {
        let result = run("Xk9!mQ2pLr7z", Mode::Business, 70);
        assert!(result[0].valid);
    }
}
