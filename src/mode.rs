//! Policy modes and the per-mode configuration record.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    #[error("Unknown mode: {0:?} (expected \"personal\" or \"business\")")]
    Unknown(String),
}

/// Policy profile an analysis runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    #[default]
    Personal,
    Business,
}

/// Thresholds and requirements selected by a [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModePolicy {
    /// Minimum length for the length feedback item.
    pub min_length: usize,
    /// Special characters are mandatory (affects feedback wording and category).
    pub requires_special: bool,
    /// Scores below this receive `penalty`. `None` disables the penalty.
    pub penalty_threshold: Option<u8>,
    pub penalty: u8,
    /// Length of the generated suggestion.
    pub suggestion_length: usize,
    /// Probability that the generator includes special characters.
    /// Ignored when `requires_special` is set.
    pub special_chance: f64,
}

const PERSONAL_POLICY: ModePolicy = ModePolicy {
    min_length: 8,
    requires_special: false,
    penalty_threshold: None,
    penalty: 0,
    suggestion_length: 12,
    special_chance: 0.7,
};

const BUSINESS_POLICY: ModePolicy = ModePolicy {
    min_length: 12,
    requires_special: true,
    penalty_threshold: Some(70),
    penalty: 10,
    suggestion_length: 16,
    special_chance: 1.0,
};

impl Mode {
    pub fn policy(self) -> ModePolicy {
        match self {
            Mode::Personal => PERSONAL_POLICY,
            Mode::Business => BUSINESS_POLICY,
        }
    }

    pub fn is_business(self) -> bool {
        self == Mode::Business
    }

    /// Returns the other mode.
    pub fn toggle(self) -> Mode {
        match self {
            Mode::Personal => Mode::Business,
            Mode::Business => Mode::Personal,
        }
    }

    /// Human readable label, e.g. for a mode switch.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Personal => "Personal Mode",
            Mode::Business => "Business Mode",
        }
    }

    /// Extra notice shown next to results in this mode.
    pub fn notice(self) -> Option<&'static str> {
        match self {
            Mode::Personal => None,
            Mode::Business => Some(
                "Business accounts require stronger password complexity and adherence to organizational security policies.",
            ),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Mode::Personal => "personal",
            Mode::Business => "business",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(Mode::Personal),
            "business" => Ok(Mode::Business),
            _ => Err(ModeError::Unknown(s.to_string())),
        }
    }
}
