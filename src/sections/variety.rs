//! Character variety section - uppercase, lowercase, numbers, special chars.

use super::{SectionInput, SectionResult};
use crate::types::{FeedbackCategory, FeedbackItem};

/// Emits one item per character class, in fixed order.
pub fn character_variety_section(input: &SectionInput<'_>) -> SectionResult {
    let checks = input.checks;
    let requires_special = input.mode.policy().requires_special;

    let special_message = if requires_special {
        "Contains special characters (required)"
    } else {
        "Contains special characters"
    };
    let special_category = if requires_special && !checks.has_special {
        FeedbackCategory::Error
    } else {
        FeedbackCategory::Success
    };

    vec![
        FeedbackItem::new("Contains uppercase letters", checks.has_upper),
        FeedbackItem::new("Contains lowercase letters", checks.has_lower),
        FeedbackItem::new("Contains numbers", checks.has_digit),
        FeedbackItem::new(special_message, checks.has_special).with_category(special_category),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::PasswordChecks;
    use crate::mode::Mode;

    fn run(pwd: &str, mode: Mode) -> SectionResult {
        let checks = PasswordChecks::inspect(pwd, &mode.policy());
        character_variety_section(&SectionInput {
            checks: &checks,
            mode,
            score: 0,
        })
    }

    #[test]
    fn test_variety_section_reports_each_class() {
        let result = run("lowercase123", Mode::Personal);
        let valid: Vec<bool> = result.iter().map(|i| i.valid).collect();
        assert_eq!(valid, vec![false, true, true, false]);
        assert!(result.iter().all(|i| i.category == FeedbackCategory::Success));
    }

    #[test]
    fn test_variety_section_business_missing_special_is_error() {
        let result = run("NoSpecial123", Mode::Business);
        let special = &result[3];
        assert_eq!(special.message, "Contains special characters (required)");
        assert!(!special.valid);
        assert_eq!(special.category, FeedbackCategory::Error);
    }

    #[test]
    fn test_variety_section_business_with_special() {
        let result = run("HasAll123!@#", Mode::Business);
        assert!(result.iter().all(|i| i.valid));
        assert_eq!(result[3].category, FeedbackCategory::Success);
    }

    #[test]
    fn test_variety_section_personal_wording() {
        let result = run("HasAll123!", Mode::Personal);
        assert_eq!(result[3].message, "Contains special characters");
    }
}
