//! Response construction for redirect hits.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// Build a redirect response with `Location: target` and a short HTML body.
///
/// A target that cannot be carried in a header (control characters, for
/// example) yields `500 Internal Server Error`.
pub fn redirect(status: StatusCode, target: &str) -> Response {
    let location = match HeaderValue::from_str(target) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(target = %target, error = %e, "Redirect target is not a valid Location header");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Invalid redirect target\n").into_response();
        }
    };

    let body = format!(
        "<a href=\"{}\">{}</a>.\n",
        escape_html(target),
        status.canonical_reason().unwrap_or("Redirect")
    );

    (
        status,
        [
            (header::LOCATION, location),
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            ),
        ],
        body,
    )
        .into_response()
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_headers() {
        let res = redirect(StatusCode::MOVED_PERMANENTLY, "https://example.com/a?b=c");
        assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(res.headers()[header::LOCATION], "https://example.com/a?b=c");
        assert_eq!(
            res.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn test_unrepresentable_target() {
        let res = redirect(StatusCode::MOVED_PERMANENTLY, "https://x/\nSet-Cookie: a=b");
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(res.headers().get(header::LOCATION).is_none());
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("/a?x=1&y=\"<b>\""), "/a?x=1&amp;y=&#34;&lt;b&gt;&#34;");
    }
}
