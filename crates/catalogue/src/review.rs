use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Review links keyed by exact product name.
///
/// Independent of the product list: a name may have a review without being in
/// the catalogue, and the other way around. Keys are kept sorted so the JSON
/// snapshot is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewLinkTable(BTreeMap<String, String>);

impl ReviewLinkTable {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert or replace the review link for `product_name`.
    pub fn insert(&mut self, product_name: impl Into<String>, url: impl Into<String>) {
        self.0.insert(product_name.into(), url.into());
    }

    /// Exact, case- and whitespace-sensitive lookup.
    pub fn get(&self, product_name: &str) -> Option<&str> {
        self.0.get(product_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N, U> FromIterator<(N, U)> for ReviewLinkTable
where
    N: Into<String>,
    U: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, U)>>(iter: I) -> Self {
        let mut table = ReviewLinkTable::new();
        for (name, url) in iter {
            table.insert(name, url);
        }
        table
    }
}

/// Resolve the review link for an exact product name.
///
/// Returns `(url, true)` when present and `("", false)` otherwise. The name is
/// not trimmed or case-folded.
pub fn find_review_link(table: &ReviewLinkTable, product_name: &str) -> (String, bool) {
    match table.get(product_name) {
        Some(url) => (url.to_string(), true),
        None => (String::new(), false),
    }
}
