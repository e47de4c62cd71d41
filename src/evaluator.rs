//! Password strength evaluator - scoring, feedback and narrative.

use secrecy::{ExposeSecret, SecretString};

use crate::checks::PasswordChecks;
use crate::mode::{Mode, ModePolicy};
use crate::sections::{SECTIONS, SectionInput};
use crate::types::{PasswordEvaluation, PasswordStrength};

const MAX_SCORE: i32 = 100;
const MAX_LENGTH_BONUS: i32 = 25;
const CLASS_BONUS: i32 = 15;
const COMMON_PATTERN_PENALTY: i32 = 20;
const SEQUENTIAL_PENALTY: i32 = 10;
const REPEATED_PENALTY: i32 = 10;

/// Computes the 0..=100 score for already inspected predicates.
pub fn score_password(checks: &PasswordChecks, policy: &ModePolicy) -> u8 {
    // floor(length * 2.5), capped
    let length = i32::try_from(checks.length).unwrap_or(i32::MAX);
    let mut score = length.saturating_mul(5).saturating_div(2).min(MAX_LENGTH_BONUS);

    score += checks.variety() as i32 * CLASS_BONUS;

    if checks.has_common_pattern {
        score -= COMMON_PATTERN_PENALTY;
    }
    if checks.has_sequential {
        score -= SEQUENTIAL_PENALTY;
    }
    if checks.has_repeated {
        score -= REPEATED_PENALTY;
    }

    let mut score = score.clamp(0, MAX_SCORE) as u8;

    if let Some(threshold) = policy.penalty_threshold {
        if score < threshold {
            score = score.saturating_sub(policy.penalty);
        }
    }
    score
}

/// Evaluates a password under `mode`.
///
/// Total over every input, including the empty string. The suggestion is
/// not part of the evaluation; see [`crate::analyze_password`].
pub fn evaluate_password(password: &SecretString, mode: Mode) -> PasswordEvaluation {
    let policy = mode.policy();
    let checks = PasswordChecks::inspect(password.expose_secret(), &policy);
    let score = score_password(&checks, &policy);

    let input = SectionInput {
        checks: &checks,
        mode,
        score,
    };

    let mut feedback = Vec::new();
    for (_section_name, section_fn) in SECTIONS {
        let items = section_fn(&input);
        #[cfg(feature = "tracing")]
        tracing::trace!("section {} produced {} item(s)", _section_name, items.len());
        feedback.extend(items);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(%mode, score, items = feedback.len(), "password evaluated");

    PasswordEvaluation {
        score,
        message: narrative(score, mode),
        feedback,
    }
}

/// Bracket paragraph followed by the mode's closing paragraph.
pub(crate) fn narrative(score: u8, mode: Mode) -> String {
    let bracket = match (mode, PasswordStrength::from_score(score)) {
        (Mode::Business, PasswordStrength::Weak) => {
            "This password doesn't meet organizational security standards. Business accounts require stronger passwords with greater complexity. Please try again with a longer password that includes special characters."
        }
        (Mode::Business, PasswordStrength::Medium) => {
            "This password is moderately secure but doesn't fully meet business requirements. Consider adding more variety with special characters and increasing length."
        }
        (Mode::Business, PasswordStrength::Strong) => {
            "This password meets business security standards. It has good complexity and length, making it suitable for organizational use."
        }
        (Mode::Personal, PasswordStrength::Weak) => {
            "This password is weak and could be easily compromised. Try adding more characters, numbers, and special symbols."
        }
        (Mode::Personal, PasswordStrength::Medium) => {
            "This password has moderate strength. Adding more variety or length would make it more secure."
        }
        (Mode::Personal, PasswordStrength::Strong) => {
            "This is a strong password! It has good length and complexity, making it difficult to crack."
        }
    };

    let closing = match mode {
        Mode::Business => {
            "Remember that as a business user, your password protects sensitive company data. Never share your password or reuse it across different services."
        }
        Mode::Personal => {
            "For personal accounts, consider using a password manager to help create and store unique passwords for all your accounts."
        }
    };

    format!("{bracket}\n\n{closing}")
}
