//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global `tracing` subscriber
//! - Resolve the log filter from `RUST_LOG` or configuration

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter {filter:?}: {source}")]
    Filter { filter: String, source: ParseError },

    #[error("logging already initialized: {0}")]
    Init(#[from] TryInitError),
}

/// Parse `EnvFilter` directives.
pub fn parse_filter(directives: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directives).map_err(|source| LoggingError::Filter {
        filter: directives.to_string(),
        source,
    })
}

/// Install the global subscriber. `RUST_LOG` overrides `default_filter`.
///
/// Fails instead of panicking when a subscriber is already installed.
pub fn init_logging(default_filter: &str) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(default_filter)?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    tracing::debug!("Logging initialized");
    Ok(())
}

/// Install the global subscriber using the configured filter.
pub fn init_from_config(config: &LoggingConfig) -> Result<(), LoggingError> {
    init_logging(&config.filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert!(parse_filter("urlshort=debug,tower_http=info").is_ok());
        assert!(parse_filter(&LoggingConfig::default().filter).is_ok());

        let err = parse_filter("urlshort=loudest").unwrap_err();
        assert!(err.to_string().contains("urlshort=loudest"));
    }

    #[test]
    fn test_second_init_fails() {
        // Installs the process-wide subscriber for this test binary; "off"
        // keeps the other tests' events out of the output.
        let _ = init_logging("off");
        assert!(matches!(
            init_from_config(&LoggingConfig::default()),
            Err(LoggingError::Init(_))
        ));
    }
}
