//! HTTP adaptation of the redirect chain.
//!
//! # Data Flow
//! ```text
//! Axum Router (every method, every path)
//!     → server.rs (AppState, tracing layer)
//!     → handler.rs (Handler chain: PathResolver → ... → terminal)
//!     → response.rs (301 + Location) or terminal response
//!     → Send to client
//! ```

pub mod chain;
pub mod handler;
pub mod response;
pub mod server;

pub use chain::build_chain;
pub use handler::{handler_fn, Handler, HandlerFn, NotFound, StaticResponse};
pub use server::RedirectServer;
