//! Result records returned by the analyzer.

/// Display category of a feedback item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FeedbackCategory {
    #[default]
    Success,
    Warning,
    Error,
}

/// One pass/fail/warning statement about the password.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedbackItem {
    pub message: String,
    pub valid: bool,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub category: FeedbackCategory,
}

impl FeedbackItem {
    /// Item with the default [`FeedbackCategory::Success`] category.
    pub fn new(message: impl Into<String>, valid: bool) -> Self {
        Self {
            message: message.into(),
            valid,
            category: FeedbackCategory::default(),
        }
    }

    pub fn with_category(mut self, category: FeedbackCategory) -> Self {
        self.category = category;
        self
    }

    /// Failed item rendered as a warning.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, false).with_category(FeedbackCategory::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, false).with_category(FeedbackCategory::Error)
    }
}

/// Score bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub const MEDIUM_THRESHOLD: u8 = 40;
    pub const STRONG_THRESHOLD: u8 = 70;

    pub fn from_score(score: u8) -> Self {
        if score < Self::MEDIUM_THRESHOLD {
            PasswordStrength::Weak
        } else if score < Self::STRONG_THRESHOLD {
            PasswordStrength::Medium
        } else {
            PasswordStrength::Strong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }
}

/// Output of the rule evaluator, before a suggestion is merged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    /// 0..=100
    pub score: u8,
    pub message: String,
    pub feedback: Vec<FeedbackItem>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score)
    }
}

/// Complete analysis handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnalysisResult {
    pub score: u8,
    pub message: String,
    pub feedback: Vec<FeedbackItem>,
    pub suggested_password: String,
}

impl AnalysisResult {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score)
    }

    /// Feedback items that did not pass.
    pub fn failures(&self) -> impl Iterator<Item = &FeedbackItem> {
        self.feedback.iter().filter(|item| !item.valid)
    }
}
