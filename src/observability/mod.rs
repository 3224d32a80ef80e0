//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! redirect / config / http
//!     → tracing events (layer loaded, redirect matched, delegated)
//!     → logging.rs (EnvFilter + fmt subscriber)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - The library only emits events; installing a subscriber is opt-in
//! - Log level configurable via config and `RUST_LOG`

pub mod logging;

pub use logging::{init_logging, LoggingError};
