//! The request-handling capability shared by every link of a redirect chain.
//!
//! # Responsibilities
//! - Turn a table hit into a permanent redirect
//! - Hand a miss to the fallback with the same request
//! - Provide terminal handlers that always answer
//!
//! # Design Decisions
//! - Synchronous: resolution is a pure in-memory read
//! - Terminal handlers are ordinary implementers, there is no "no fallback" case

use std::borrow::Cow;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::http::response;
use crate::redirect::{Action, PathResolver};

/// Something that can answer an HTTP request.
pub trait Handler: Send + Sync {
    fn handle(&self, request: &Request<Body>) -> Response;
}

/// Percent-decoded request path, or the raw path when the decoded bytes are
/// not UTF-8.
fn request_path(request: &Request<Body>) -> Cow<'_, str> {
    let raw = request.uri().path();
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

impl<F: Handler> Handler for PathResolver<F> {
    fn handle(&self, request: &Request<Body>) -> Response {
        let path = request_path(request);
        match self.resolve(&path) {
            Action::Redirect { target, status } => {
                tracing::debug!(path = %path, target = %target, "Redirect matched");
                response::redirect(status, target)
            }
            Action::Delegate => {
                tracing::debug!(path = %path, "No redirect, delegating");
                self.fallback().handle(request)
            }
        }
    }
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn handle(&self, request: &Request<Body>) -> Response {
        (**self).handle(request)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle(&self, request: &Request<Body>) -> Response {
        (**self).handle(request)
    }
}

/// Terminal handler answering every request with the same status and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticResponse {
    status: StatusCode,
    body: String,
}

impl StaticResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `200 OK` with `Hello, world!`.
    pub fn hello() -> Self {
        Self::new(StatusCode::OK, "Hello, world!\n")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl Handler for StaticResponse {
    fn handle(&self, _request: &Request<Body>) -> Response {
        (self.status, self.body.clone()).into_response()
    }
}

/// Terminal handler answering `404 Not Found`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFound;

impl Handler for NotFound {
    fn handle(&self, _request: &Request<Body>) -> Response {
        (StatusCode::NOT_FOUND, "404 page not found\n").into_response()
    }
}

/// Adapts a plain function into a [`Handler`].
#[derive(Clone)]
pub struct HandlerFn<F>(F);

pub fn handler_fn<F>(f: F) -> HandlerFn<F>
where
    F: Fn(&Request<Body>) -> Response + Send + Sync,
{
    HandlerFn(f)
}

impl<F> Handler for HandlerFn<F>
where
    F: Fn(&Request<Body>) -> Response + Send + Sync,
{
    fn handle(&self, request: &Request<Body>) -> Response {
        (self.0)(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    fn get(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_hit_answers_with_location() {
        let resolver = PathResolver::from_map([("/a", "https://example.com/a")], NotFound);
        let res = resolver.handle(&get("/a"));
        assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(res.headers()[header::LOCATION], "https://example.com/a");
    }

    #[test]
    fn test_miss_reaches_terminal() {
        let resolver = PathResolver::from_map([("/a", "https://example.com/a")], StaticResponse::hello());
        let res = resolver.handle(&get("/b"));
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().get(header::LOCATION).is_none());
    }

    #[test]
    fn test_query_string_is_not_part_of_the_path() {
        let resolver = PathResolver::from_map([("/a", "https://x")], NotFound);
        let res = resolver.handle(&get("/a?utm=1"));
        assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    }

    #[test]
    fn test_encoded_path_matches_decoded_key() {
        let resolver = PathResolver::from_yaml(
            "- path: /hello world\n  url: https://x/space\n- path: /café\n  url: https://x/cafe\n".as_bytes(),
            NotFound,
        )
        .unwrap();

        let res = resolver.handle(&get("/hello%20world"));
        assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(res.headers()[header::LOCATION], "https://x/space");

        let res = resolver.handle(&get("/caf%C3%A9"));
        assert_eq!(res.headers()[header::LOCATION], "https://x/cafe");
    }

    #[test]
    fn test_non_utf8_escape_uses_raw_path() {
        let resolver = PathResolver::from_map([("/%FF", "https://x/raw")], NotFound);
        let res = resolver.handle(&get("/%FF"));
        assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(res.headers()[header::LOCATION], "https://x/raw");
    }

    #[test]
    fn test_shared_terminal() {
        let terminal = Arc::new(NotFound);
        let left = PathResolver::from_map([("/l", "https://left")], Arc::clone(&terminal));
        let right = PathResolver::from_map([("/r", "https://right")], terminal);

        assert_eq!(left.handle(&get("/r")).status(), StatusCode::NOT_FOUND);
        assert_eq!(right.handle(&get("/r")).status(), StatusCode::MOVED_PERMANENTLY);
    }

    #[test]
    fn test_handler_fn_sees_the_original_request() {
        let terminal = handler_fn(|req: &Request<Body>| {
            (StatusCode::IM_A_TEAPOT, req.uri().path().to_string()).into_response()
        });
        let resolver = PathResolver::from_map([("/a", "https://x")], terminal);
        assert_eq!(resolver.handle(&get("/tea")).status(), StatusCode::IM_A_TEAPOT);
    }
}
