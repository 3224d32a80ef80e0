//! A redirect table paired with the fallback consulted on a miss.

use axum::http::StatusCode;

use crate::redirect::entry::{self, DecodeError, DocumentFormat};
use crate::redirect::table::RedirectTable;

/// Status used for every redirect answered by a table.
pub const REDIRECT_STATUS: StatusCode = StatusCode::MOVED_PERMANENTLY;

/// Outcome of resolving one request path against one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    /// The table holds the path; answer with a redirect.
    Redirect { target: &'a str, status: StatusCode },
    /// The table does not hold the path; the fallback must handle the request.
    Delegate,
}

impl<'a> Action<'a> {
    pub fn redirect(target: &'a str) -> Self {
        Action::Redirect {
            target,
            status: REDIRECT_STATUS,
        }
    }

    pub fn is_delegate(&self) -> bool {
        matches!(self, Action::Delegate)
    }
}

/// Maps request paths to redirect targets, deferring to `fallback` on a miss.
///
/// The fallback is owned. Nesting resolvers forms a priority chain where the
/// outermost table is checked first:
///
/// ```
/// use urlshort::redirect::{Action, PathResolver, RedirectTable};
///
/// let inner = PathResolver::from_map([("/a", "https://inner")], ());
/// let outer = PathResolver::new(RedirectTable::from_map([("/a", "https://outer")]), inner);
///
/// assert_eq!(outer.resolve("/a"), Action::redirect("https://outer"));
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver<F> {
    table: RedirectTable,
    fallback: F,
}

impl<F> PathResolver<F> {
    /// Build from an already valid table. Cannot fail.
    pub fn new(table: RedirectTable, fallback: F) -> Self {
        Self { table, fallback }
    }

    /// Build from a literal `path → url` mapping.
    pub fn from_map<I, K, V>(paths: I, fallback: F) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(RedirectTable::from_map(paths), fallback)
    }

    /// Decode `data` as a redirect document and build a resolver over it.
    ///
    /// Entries are inserted in document order, so a repeated path keeps its
    /// last URL. On error nothing is built and `fallback` is dropped.
    pub fn from_bytes(
        format: DocumentFormat,
        data: &[u8],
        fallback: F,
    ) -> Result<Self, DecodeError> {
        let entries = match entry::decode(format, data) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(format = %format, error = %e, "Rejected redirect document");
                return Err(e);
            }
        };
        let table = RedirectTable::from_entries(entries);
        tracing::info!(format = %format, paths = table.len(), "Redirect table built");
        Ok(Self::new(table, fallback))
    }

    pub fn from_yaml(data: &[u8], fallback: F) -> Result<Self, DecodeError> {
        Self::from_bytes(DocumentFormat::Yaml, data, fallback)
    }

    pub fn from_json(data: &[u8], fallback: F) -> Result<Self, DecodeError> {
        Self::from_bytes(DocumentFormat::Json, data, fallback)
    }

    /// Look `path` up in this resolver's own table only.
    ///
    /// Matching is exact string equality: no case folding, trailing-slash
    /// handling or percent-decoding.
    pub fn resolve(&self, path: &str) -> Action<'_> {
        match self.table.get(path) {
            Some(target) => Action::redirect(target),
            None => Action::Delegate,
        }
    }

    pub fn table(&self) -> &RedirectTable {
        &self.table
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}
