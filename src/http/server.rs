//! HTTP surface of the redirect chain.
//!
//! # Responsibilities
//! - Build the handler chain from configuration
//! - Expose it as an Axum `Router` that sends every method and path to the chain
//! - Wire up request tracing
//!
//! Binding a listener and running the process is left to the embedding program.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::loader::ConfigError;
use crate::config::RedirectConfig;
use crate::http::chain::build_chain;
use crate::http::handler::Handler;

/// Application state injected into the request handler.
#[derive(Clone)]
pub struct AppState {
    pub chain: Arc<dyn Handler>,
}

/// Redirect service ready to be mounted or served.
pub struct RedirectServer {
    chain: Arc<dyn Handler>,
}

impl RedirectServer {
    /// Build the chain described by `config`.
    pub fn new(config: &RedirectConfig) -> Result<Self, ConfigError> {
        let chain = build_chain(config)?;
        Ok(Self {
            chain: Arc::from(chain),
        })
    }

    /// Serve an already assembled chain.
    pub fn from_handler<H: Handler + 'static>(handler: H) -> Self {
        Self {
            chain: Arc::new(handler),
        }
    }

    pub fn chain(&self) -> &Arc<dyn Handler> {
        &self.chain
    }

    /// Build the Axum router with tracing middleware.
    pub fn into_router(self) -> Router {
        let state = AppState { chain: self.chain };
        Router::new()
            .fallback(redirect_handler)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }
}

async fn redirect_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    state.chain.handle(&request)
}
