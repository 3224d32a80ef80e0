//! URL shortener redirect library.
//!
//! Maps request paths to destination URLs. Tables come from literal mappings
//! or YAML/JSON documents and chain together, each deferring to the next on a
//! miss until a terminal handler answers.
//!
//! ```
//! use urlshort::http::{Handler, StaticResponse};
//! use urlshort::redirect::PathResolver;
//!
//! let statics = PathResolver::from_map(
//!     [("/urlshort-godoc", "https://godoc.org/github.com/gophercises/urlshort")],
//!     StaticResponse::hello(),
//! );
//! let yaml = b"- path: /urlshort\n  url: https://github.com/gophercises/urlshort\n";
//! let chain = PathResolver::from_yaml(yaml, statics).unwrap();
//!
//! let request = axum::http::Request::builder()
//!     .uri("/urlshort")
//!     .body(axum::body::Body::empty())
//!     .unwrap();
//! assert_eq!(chain.handle(&request).status(), 301);
//! ```

pub mod config;
pub mod http;
pub mod observability;
pub mod redirect;

pub use config::RedirectConfig;
pub use http::RedirectServer;
pub use redirect::{Action, DecodeError, PathResolver};
