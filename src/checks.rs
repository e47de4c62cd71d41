//! Character-class and pattern predicates computed once per password.

use crate::mode::ModePolicy;

/// Low-entropy substrings matched case-insensitively.
pub const COMMON_PATTERNS: &[&str] = &["123", "abc", "qwerty", "password", "admin"];

const ALPHA_SEQUENCE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGIT_SEQUENCE: &str = "0123456789";
const SEQUENCE_RUN: usize = 3;
const REPEAT_RUN: usize = 3;

/// Minimum length regardless of mode.
pub const BASE_MIN_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordChecks {
    /// Length in characters.
    pub length: usize,
    pub length_ok: bool,
    /// Length against the active mode's minimum.
    pub length_for_mode: bool,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
    pub has_common_pattern: bool,
    pub has_sequential: bool,
    pub has_repeated: bool,
}

impl PasswordChecks {
    pub fn inspect(password: &str, policy: &ModePolicy) -> Self {
        let length = password.chars().count();
        let lowered = password.to_lowercase();

        Self {
            length,
            length_ok: length >= BASE_MIN_LENGTH,
            length_for_mode: length >= policy.min_length,
            has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lower: password.chars().any(|c| c.is_ascii_lowercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special: password.chars().any(is_special),
            has_common_pattern: contains_common_pattern(&lowered),
            has_sequential: contains_sequence(&lowered),
            has_repeated: has_repeated(password),
        }
    }

    /// Number of character classes present.
    pub fn variety(&self) -> usize {
        [self.has_upper, self.has_lower, self.has_digit, self.has_special]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// Punctuation or symbol: printable, neither alphanumeric nor whitespace.
pub fn is_special(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && !c.is_control()
}

/// Case-insensitive match against [`COMMON_PATTERNS`].
pub fn has_common_pattern(password: &str) -> bool {
    contains_common_pattern(&password.to_lowercase())
}

/// Case-insensitive match against any 3-character run of `a..z` or `0..9`.
pub fn has_sequential(password: &str) -> bool {
    contains_sequence(&password.to_lowercase())
}

/// Any character repeated 3+ times in a row.
pub fn has_repeated(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(REPEAT_RUN)
        .any(|w| w.iter().all(|&c| c == w[0]))
}

fn contains_common_pattern(lowered: &str) -> bool {
    COMMON_PATTERNS.iter().any(|p| lowered.contains(p))
}

fn contains_sequence(lowered: &str) -> bool {
    [ALPHA_SEQUENCE, DIGIT_SEQUENCE].iter().any(|seq| {
        // Sequences are ASCII, byte windows are char windows.
        seq.as_bytes()
            .windows(SEQUENCE_RUN)
            .filter_map(|w| std::str::from_utf8(w).ok())
            .any(|run| lowered.contains(run))
    })
}
