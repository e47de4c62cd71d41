//! Password strength analysis library
//!
//! Scores a candidate password under a personal or business policy,
//! explains the result with ordered feedback items and a narrative
//! message, and suggests a randomly generated replacement.
//!
//! # Features
//!
//! - `async` (default): Enables the delayed async entry point with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives `Serialize`/`Deserialize` for the result records
//!
//! # Environment Variables
//!
//! - `PWD_ANALYSIS_DELAY_MS`: Simulated latency of the async entry point
//!   (default: `500`)
//!
//! # Example
//!
//! ```rust
//! use pwd_advisor::{analyze_password, Mode};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let analysis = analyze_password(&password, Mode::Business);
//!
//! println!("Score: {}", analysis.score);
//! println!("Strength: {:?}", analysis.strength());
//! for item in &analysis.feedback {
//!     println!("[{}] {}", if item.valid { "x" } else { " " }, item.message);
//! }
//! println!("Try: {}", analysis.suggested_password);
//! ```

// Internal modules
mod analyzer;
mod checks;
mod config;
mod evaluator;
mod generator;
mod mode;
mod sections;
mod types;

// Public API
pub use analyzer::{analyze_password, analyze_password_with, AnalyzeError};
pub use checks::{
    has_common_pattern, has_repeated, has_sequential, PasswordChecks, COMMON_PATTERNS,
};
pub use config::{get_analysis_delay, DEFAULT_DELAY_MS, DELAY_ENV_VAR};
pub use evaluator::{evaluate_password, score_password};
pub use generator::{generate_password, generate_password_with};
pub use mode::{Mode, ModeError, ModePolicy};
pub use types::{
    AnalysisResult, FeedbackCategory, FeedbackItem, PasswordEvaluation, PasswordStrength,
};

#[cfg(feature = "async")]
pub use analyzer::{analyze_password_async, analyze_password_tx};
