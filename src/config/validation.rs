//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Layer names are present and unique
//! - Fallback status is a real HTTP status code
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RedirectConfig → Result<(), Vec<ValidationError>>
//! - Document contents are decoded at chain build time, not here

use std::collections::HashSet;

use axum::http::StatusCode;
use thiserror::Error;

use crate::config::schema::RedirectConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("layer #{0} has an empty name")]
    EmptyLayerName(usize),

    #[error("duplicate layer name: {0:?}")]
    DuplicateLayerName(String),

    #[error("invalid fallback status code: {0}")]
    InvalidFallbackStatus(u16),
}

pub fn validate_config(config: &RedirectConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if StatusCode::from_u16(config.fallback.status).is_err() {
        errors.push(ValidationError::InvalidFallbackStatus(config.fallback.status));
    }

    let mut seen = HashSet::new();
    for (index, layer) in config.layers.iter().enumerate() {
        if layer.name.trim().is_empty() {
            errors.push(ValidationError::EmptyLayerName(index));
        } else if !seen.insert(layer.name.as_str()) {
            errors.push(ValidationError::DuplicateLayerName(layer.name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
