//! Search filtering over catalog listings.
//!
//! A query matches an entry when it appears, case-insensitively, anywhere in
//! the title, artist, album or genre. Filtering keeps the source order and is
//! recomputed on every call; nothing is cached.

use crate::models::Entry;
use serde::{Deserialize, Serialize};

/// Free-text search as typed into the search box.
///
/// The text is used as-is: no trimming, so `" "` only matches fields that
/// contain a space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The query exactly as entered
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// An empty query matches everything
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether `entry` should stay in the filtered view
    pub fn matches(&self, entry: &Entry) -> bool {
        if self.is_empty() {
            return true;
        }

        let needle = self.text.to_lowercase();
        [
            Some(entry.title.as_str()),
            Some(entry.artist.as_str()),
            Some(entry.album.as_str()),
            entry.genre.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl From<&str> for SearchQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Entries matching `query`, in their original order.
///
/// An empty query returns every entry unchanged.
pub fn filter_entries(entries: &[Entry], query: &str) -> Vec<Entry> {
    let query = SearchQuery::new(query);
    if query.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| query.matches(entry))
        .cloned()
        .collect()
}
