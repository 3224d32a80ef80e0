//! Redirect entry records and their decoders.
//!
//! Both formats carry the same shape, a sequence of records:
//!
//! ```yaml
//! - path: /some-path
//!   url: https://www.some-url.com/demo
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// One mapping from a request path to a destination URL.
///
/// `url` is passed through as-is; it is never parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RedirectEntry {
    pub path: String,
    pub url: String,
}

impl RedirectEntry {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

/// Errors produced while decoding a redirect document.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Input is not valid YAML or does not match the record schema.
    #[error("invalid YAML redirect document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Input is not valid JSON or does not match the record schema.
    #[error("invalid JSON redirect document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialization format of a redirect document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[serde(alias = "yml")]
    Yaml,
    Json,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Yaml => f.write_str("yaml"),
            DocumentFormat::Json => f.write_str("json"),
        }
    }
}

/// Returned when a format name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown document format: {0:?} (expected yaml, yml or json)")]
pub struct UnknownFormat(pub String);

impl FromStr for DocumentFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "json" => Ok(DocumentFormat::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Decode a YAML sequence of `{path, url}` records.
///
/// An empty (or whitespace-only) document and a `null` document both decode
/// to no entries. Only the first document of a multi-document stream is read.
pub fn from_yaml_bytes(data: &[u8]) -> Result<Vec<RedirectEntry>, DecodeError> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let Some(document) = serde_yaml::Deserializer::from_slice(data).next() else {
        return Ok(Vec::new());
    };
    let entries = Option::<Vec<RedirectEntry>>::deserialize(document)?;
    Ok(entries.unwrap_or_default())
}

/// Decode a JSON array of `{"path", "url"}` objects.
///
/// `null` decodes to no entries; empty input is a syntax error.
pub fn from_json_bytes(data: &[u8]) -> Result<Vec<RedirectEntry>, DecodeError> {
    let entries: Option<Vec<RedirectEntry>> = serde_json::from_slice(data)?;
    Ok(entries.unwrap_or_default())
}

/// Decode `data` according to `format`.
pub fn decode(format: DocumentFormat, data: &[u8]) -> Result<Vec<RedirectEntry>, DecodeError> {
    match format {
        DocumentFormat::Yaml => from_yaml_bytes(data),
        DocumentFormat::Json => from_json_bytes(data),
    }
}
