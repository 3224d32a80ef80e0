//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::redirect::DocumentFormat;

/// Root configuration for the redirect service.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RedirectConfig {
    /// Log filter settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Response used when no layer holds the requested path.
    #[serde(default)]
    pub fallback: FallbackConfig,

    /// Redirect layers, highest priority first.
    #[serde(default)]
    pub layers: Vec<LayerConfig>,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            fallback: FallbackConfig::default(),
            layers: vec![LayerConfig {
                name: "static".to_string(),
                source: LayerSource::Table {
                    paths: BTreeMap::from([
                        (
                            "/urlshort-godoc".to_string(),
                            "https://godoc.org/github.com/gophercises/urlshort".to_string(),
                        ),
                        (
                            "/yaml-godoc".to_string(),
                            "https://godoc.org/gopkg.in/yaml.v2".to_string(),
                        ),
                    ]),
                },
            }],
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "urlshort=info,tower_http=info".to_string(),
        }
    }
}

/// Terminal response configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FallbackConfig {
    /// HTTP status code of the catch-all response.
    pub status: u16,

    /// Plain text body of the catch-all response.
    pub body: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            status: 200,
            body: "Hello, world!\n".to_string(),
        }
    }
}

/// One redirect table in the chain.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LayerConfig {
    /// Layer identifier for logging and error reports.
    pub name: String,

    #[serde(flatten)]
    pub source: LayerSource,
}

/// Where a layer's mappings come from.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayerSource {
    /// Literal `path = url` pairs.
    Table {
        #[serde(default)]
        paths: BTreeMap<String, String>,
    },

    /// An embedded YAML or JSON redirect document.
    Document {
        format: DocumentFormat,
        source: String,
    },
}
