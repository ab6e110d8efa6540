#![forbid(unsafe_code)]

//! JSON log output for production embedding.
//!
//! The filter is read from [`LOG_ENV`] using `EnvFilter` directive syntax and
//! falls back to `info` when unset or invalid.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "RIDEPAY_LOG";

/// Default filter directive.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from [`LOG_ENV`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global JSON subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_json() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .with_current_span(false)
        .try_init()?;
    tracing::debug!(filter_env = LOG_ENV, "json logging installed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_falls_back_to_default() {
        if std::env::var_os(LOG_ENV).is_none() {
            assert_eq!(env_filter().to_string(), DEFAULT_FILTER);
        }
    }
}
