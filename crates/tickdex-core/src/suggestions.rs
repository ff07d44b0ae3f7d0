use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-key capacity of the suggestion index.
pub const MAX_SUGGESTIONS: usize = 5;

/// Bounded, order-preserving, deduplicating multimap from a search prefix to
/// ticker symbols.
///
/// Per-key ticker order IS the ranking: the builder's passes insert in
/// priority order and `insert` refuses duplicates and overflow, so earlier
/// passes permanently reserve slots. Top-level key order is whatever the
/// backing hash map yields; it is stable within one build run but not
/// canonical across runs.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionIndex {
    entries: HashMap<String, Vec<String>>,
}

impl SuggestionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `ticker` as a suggestion for `key`.
    ///
    /// A no-op when the key already holds `MAX_SUGGESTIONS` tickers or
    /// already contains `ticker`. Never fails; the empty string is a valid
    /// (if useless) key.
    pub fn insert(&mut self, key: impl Into<String>, ticker: &str) {
        let values = self.entries.entry(key.into()).or_default();
        if values.len() < MAX_SUGGESTIONS && !values.iter().any(|held| held == ticker) {
            values.push(ticker.to_owned());
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Serialize to the persisted `key -> [ticker]` JSON form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}
