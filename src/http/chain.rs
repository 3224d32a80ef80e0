//! Assemble a redirect chain from configuration.

use axum::http::StatusCode;

use crate::config::loader::ConfigError;
use crate::config::schema::{FallbackConfig, LayerConfig, LayerSource, RedirectConfig};
use crate::config::validation::{validate_config, ValidationError};
use crate::http::handler::{Handler, StaticResponse};
use crate::redirect::PathResolver;

/// Build the handler chain described by `config`.
///
/// Layers are listed highest priority first, so they are wrapped from last to
/// first around the terminal fallback. Any layer failing to decode aborts the
/// whole build.
pub fn build_chain(config: &RedirectConfig) -> Result<Box<dyn Handler>, ConfigError> {
    validate_config(config).map_err(ConfigError::Validation)?;

    let mut chain: Box<dyn Handler> = Box::new(terminal(&config.fallback)?);
    for layer in config.layers.iter().rev() {
        chain = Box::new(build_layer(layer, chain)?);
    }

    tracing::info!(layers = config.layers.len(), "Redirect chain assembled");
    Ok(chain)
}

fn terminal(fallback: &FallbackConfig) -> Result<StaticResponse, ConfigError> {
    let status = StatusCode::from_u16(fallback.status).map_err(|_| {
        ConfigError::Validation(vec![ValidationError::InvalidFallbackStatus(fallback.status)])
    })?;
    Ok(StaticResponse::new(status, fallback.body.clone()))
}

fn build_layer<F>(layer: &LayerConfig, fallback: F) -> Result<PathResolver<F>, ConfigError> {
    let resolver = match &layer.source {
        LayerSource::Table { paths } => PathResolver::from_map(paths.clone(), fallback),
        LayerSource::Document { format, source } => {
            PathResolver::from_bytes(*format, source.as_bytes(), fallback).map_err(|e| {
                ConfigError::Decode {
                    layer: layer.name.clone(),
                    source: e,
                }
            })?
        }
    };

    for (path, _) in resolver.table().iter() {
        if !path.starts_with('/') {
            tracing::warn!(layer = %layer.name, path = %path, "Redirect path does not start with '/'");
        }
    }
    tracing::info!(layer = %layer.name, paths = resolver.table().len(), "Redirect layer loaded");
    Ok(resolver)
}
