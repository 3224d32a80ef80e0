//! Shared utilities for integration tests.

use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

/// Build an empty-bodied request.
pub fn request(method: Method, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

/// Drive one request through the router in-process.
pub async fn send(router: Router, req: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = router.oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

pub async fn get(router: Router, path: &str) -> (StatusCode, HeaderMap, String) {
    send(router, request(Method::GET, path)).await
}

/// Redirect document used across tests.
#[allow(dead_code)]
pub const YAML_URLS: &str = "\
- path: /urlshort
  url: https://github.com/gophercises/urlshort
- path: /urlshort-final
  url: https://github.com/gophercises/urlshort/tree/solution
- path: /urlshort-godoc
  url: https://example.com/overridden
";
