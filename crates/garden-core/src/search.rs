//! Case-insensitive substring search over the catalog
//!
//! Results keep catalog order; there is no ranking.

use std::fmt;

use crate::catalog::Catalog;
use crate::types::{PlantRecord, SearchMode};

/// A validated, non-blank search query.
///
/// Constructing one is the only way to call [`search`], so a blank query can
/// never reach the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    folded: String,
}

impl SearchQuery {
    /// Trim `raw` and wrap it, or return `None` if nothing is left.
    pub fn new(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            folded: text.to_lowercase(),
        })
    }

    /// The trimmed query as the user typed it.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.folded)
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Whether a single record matches `query` under `mode`.
pub fn matches(plant: &PlantRecord, query: &SearchQuery, mode: SearchMode) -> bool {
    match mode {
        SearchMode::ByName => query.matches(&plant.name) || query.matches(&plant.scientific_name),
        SearchMode::ByCondition => plant.diseases.iter().any(|d| query.matches(d)),
    }
}

/// Filter the catalog, returning owned copies of every matching record.
pub fn search(catalog: &Catalog, query: &SearchQuery, mode: SearchMode) -> Vec<PlantRecord> {
    let results: Vec<PlantRecord> = catalog
        .iter()
        .filter(|plant| matches(plant, query, mode))
        .cloned()
        .collect();

    tracing::debug!(
        "search '{}' ({}) matched {} plant(s)",
        query,
        mode,
        results.len()
    );
    results
}
