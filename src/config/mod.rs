//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config text (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RedirectConfig (validated, immutable)
//!     → http::chain (layers folded into a handler chain)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Reading the text from disk is the caller's job

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config_str, ConfigError};
pub use schema::{FallbackConfig, LayerConfig, LayerSource, LoggingConfig, RedirectConfig};
pub use validation::{validate_config, ValidationError};
