//! Immutable path → URL lookup table.

use std::collections::HashMap;

use crate::redirect::entry::RedirectEntry;

/// A single-valued mapping from request path to redirect target.
///
/// Built once; there is no way to mutate a table after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectTable {
    paths: HashMap<String, String>,
}

impl RedirectTable {
    /// Build from a literal mapping. Keys are already unique.
    pub fn from_map<I, K, V>(paths: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            paths: paths
                .into_iter()
                .map(|(path, url)| (path.into(), url.into()))
                .collect(),
        }
    }

    /// Build from decoded entries in document order; a later entry for the
    /// same path replaces the earlier one.
    pub fn from_entries(entries: impl IntoIterator<Item = RedirectEntry>) -> Self {
        let mut paths = HashMap::new();
        for entry in entries {
            paths.insert(entry.path, entry.url);
        }
        Self { paths }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.paths.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over `(path, url)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.paths.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }
}

impl FromIterator<RedirectEntry> for RedirectTable {
    fn from_iter<T: IntoIterator<Item = RedirectEntry>>(iter: T) -> Self {
        Self::from_entries(iter)
    }
}
