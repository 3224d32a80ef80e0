//! Configuration loading.

use thiserror::Error;

use crate::config::schema::RedirectConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::redirect::DecodeError;

/// Error type for configuration loading and chain assembly.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("Layer {layer:?}: {source}")]
    Decode { layer: String, source: DecodeError },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn load_config_str(content: &str) -> Result<RedirectConfig, ConfigError> {
    let config: RedirectConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
