//! Path redirect resolution.
//!
//! # Data Flow
//! ```text
//! YAML / JSON bytes
//!     → entry.rs (decode into RedirectEntry records)
//!     → table.rs (fold into RedirectTable, last write wins)
//!     → resolver.rs (PathResolver: table + fallback)
//!     → Return: Action::Redirect or Action::Delegate
//!
//! Literal mapping
//!     → table.rs
//!     → resolver.rs
//! ```
//!
//! # Design Decisions
//! - Tables are built once and never mutated (shared without locks)
//! - Exact, case-sensitive path matching; no normalization
//! - Absence of a mapping is an outcome, not an error
//! - Decoding is atomic: a bad document yields no table at all

pub mod entry;
pub mod resolver;
pub mod table;

pub use entry::{DecodeError, DocumentFormat, RedirectEntry, UnknownFormat};
pub use resolver::{Action, PathResolver};
pub use table::RedirectTable;
