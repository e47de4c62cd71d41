//! Analysis entry points - evaluation merged with a suggested password.

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::evaluator::evaluate_password;
use crate::generator::generate_password_with;
use crate::mode::Mode;
use crate::types::AnalysisResult;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Password analysis cancelled")]
    Cancelled,
}

impl AnalyzeError {
    /// Generic text for the caller to show when an analysis fails.
    pub fn user_notice(&self) -> &'static str {
        "Failed to analyze password. Please try again."
    }
}

/// Analyzes `password` under `mode` and attaches a fresh suggestion.
///
/// A suggestion is generated even for strong passwords.
pub fn analyze_password(password: &SecretString, mode: Mode) -> AnalysisResult {
    analyze_password_with(&mut rand::rng(), password, mode)
}

/// Same as [`analyze_password`], drawing the suggestion from `rng`.
pub fn analyze_password_with<R: Rng + ?Sized>(
    rng: &mut R,
    password: &SecretString,
    mode: Mode,
) -> AnalysisResult {
    let evaluation = evaluate_password(password, mode);
    let suggested_password = generate_password_with(rng, mode);

    let message = format!(
        "{}\n\nHere's a suggested strong password you can use: {}",
        evaluation.message, suggested_password
    );

    AnalysisResult {
        score: evaluation.score,
        message,
        feedback: evaluation.feedback,
        suggested_password,
    }
}

/// Analyzes after the configured latency (see [`crate::get_analysis_delay`]).
///
/// Cancelling `token` before the delay ends abandons the analysis and
/// returns [`AnalyzeError::Cancelled`].
#[cfg(feature = "async")]
pub async fn analyze_password_async(
    password: &SecretString,
    mode: Mode,
    token: Option<CancellationToken>,
) -> Result<AnalysisResult, AnalyzeError> {
    let delay = crate::config::get_analysis_delay();
    let token = token.unwrap_or_else(CancellationToken::new);

    #[cfg(feature = "tracing")]
    tracing::info!(%mode, "analysis is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::info!("analysis cancelled");
            return Err(AnalyzeError::Cancelled);
        }
        _ = tokio::time::sleep(delay) => {}
    }

    Ok(analyze_password(password, mode))
}

/// Async version that sends the outcome via channel.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    password: &SecretString,
    mode: Mode,
    token: CancellationToken,
    tx: mpsc::Sender<Result<AnalysisResult, AnalyzeError>>,
) {
    let outcome = analyze_password_async(password, mode, Some(token)).await;

    if let Err(_e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use serial_test::serial;
    use std::time::Duration;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_analyze_waits_for_delay() {
        let start = tokio::time::Instant::now();
        let result = analyze_password_async(&secret("Xk9!mQ2pLr7z"), Mode::Business, None)
            .await
            .expect("not cancelled");

        assert!(start.elapsed() >= Duration::from_millis(500));
        assert_eq!(result.score, 85);
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_analyze_with_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let outcome =
            analyze_password_async(&secret("Password123!"), Mode::Personal, Some(token)).await;
        assert_eq!(outcome, Err(AnalyzeError::Cancelled));
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_analyze_cancelled_while_waiting() {
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            canceller.cancel();
        });

        let outcome =
            analyze_password_async(&secret("Password123!"), Mode::Personal, Some(token)).await;
        assert_eq!(outcome, Err(AnalyzeError::Cancelled));
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_analyze_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        analyze_password_tx(&secret("Password123!"), Mode::Personal, token, tx).await;

        let outcome = rx.recv().await.expect("Should receive analysis");
        let result = outcome.expect("not cancelled");
        assert_eq!(result.suggested_password.chars().count(), 12);
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_analyze_password_tx_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Dropped result is not an error for the sender.
        analyze_password_tx(&secret("abc"), Mode::Business, CancellationToken::new(), tx).await;
    }
}
