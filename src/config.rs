//! Runtime configuration read from the environment.

use std::time::Duration;

/// Environment variable overriding the simulated analysis latency.
pub const DELAY_ENV_VAR: &str = "PWD_ANALYSIS_DELAY_MS";

pub const DEFAULT_DELAY_MS: u64 = 500;

/// Returns the delay applied before an async analysis resolves.
///
/// Priority:
/// 1. Environment variable `PWD_ANALYSIS_DELAY_MS` (milliseconds)
/// 2. Default of 500ms
///
/// Values that do not parse as an integer fall back to the default.
pub fn get_analysis_delay() -> Duration {
    let millis = match std::env::var(DELAY_ENV_VAR) {
        Ok(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_e| {
            #[cfg(feature = "tracing")]
            tracing::warn!("Ignoring invalid {}={:?}: {}", DELAY_ENV_VAR, raw, _e);
            DEFAULT_DELAY_MS
        }),
        Err(_) => DEFAULT_DELAY_MS,
    };
    Duration::from_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_env(key: &str, value: &str) {
        // SAFETY: only touched from #[serial] tests
        unsafe {
            std::env::set_var(key, value);
        }
    }

    fn remove_env(key: &str) {
        // SAFETY: only touched from #[serial] tests
        unsafe {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_get_analysis_delay_default() {
        remove_env(DELAY_ENV_VAR);
        assert_eq!(get_analysis_delay(), Duration::from_millis(500));
    }

    #[test]
    #[serial]
    fn test_get_analysis_delay_from_env() {
        set_env(DELAY_ENV_VAR, " 25 ");
        assert_eq!(get_analysis_delay(), Duration::from_millis(25));
        remove_env(DELAY_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_get_analysis_delay_invalid_falls_back() {
        set_env(DELAY_ENV_VAR, "soon");
        assert_eq!(get_analysis_delay(), Duration::from_millis(DEFAULT_DELAY_MS));
        remove_env(DELAY_ENV_VAR);
    }
}
