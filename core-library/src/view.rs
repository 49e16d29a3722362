//! Catalog view state for a list screen.
//!
//! `CatalogView` remembers what the user is looking at (search text, current
//! page, page size). A [`ViewSnapshot`] is rebuilt from the store on every
//! read: filter, then paginate, then compute the page window.

use crate::error::{LibraryError, Result};
use crate::models::Entry;
use crate::query::{filter_entries, SearchQuery};
use crate::repositories::{
    clamp_page, paginate, total_pages, visible_pages, CatalogStore, Page, PageRequest, PageSlot,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Search and page position over a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    query: SearchQuery,
    page: u32,
    page_size: u32,
}

impl CatalogView {
    /// Start on page 1 with no search.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `page_size` is zero.
    pub fn new(page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(LibraryError::invalid(
                "page_size",
                "page size must be positive",
            ));
        }

        Ok(Self {
            query: SearchQuery::default(),
            page: 1,
            page_size,
        })
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Replace the search text and jump back to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = SearchQuery::new(query);
        self.page = 1;
    }

    /// Navigate to the page behind a navigation button.
    ///
    /// Ellipsis slots do nothing. Returns whether the page changed.
    pub fn go_to(&mut self, slot: PageSlot) -> bool {
        match slot.page() {
            Some(page) if page >= 1 && page != self.page => {
                self.page = page;
                true
            }
            _ => false,
        }
    }

    /// Move forward one page unless already on the last one.
    pub fn next_page(&mut self, store: &CatalogStore) -> bool {
        let last = self.total_pages(store);
        if self.page >= last {
            return false;
        }
        self.page += 1;
        true
    }

    /// Move back one page unless already on the first one.
    pub fn previous_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }

    fn total_pages(&self, store: &CatalogStore) -> u32 {
        let matching = store
            .list()
            .iter()
            .filter(|entry| self.query.matches(entry))
            .count();
        total_pages(matching, self.page_size)
    }

    /// Recompute the visible page from the current store contents.
    ///
    /// The current page is first pulled back into range, so removing the last
    /// entry of the last page lands on the page before it.
    pub fn snapshot(&mut self, store: &CatalogStore) -> Result<ViewSnapshot> {
        let filtered = filter_entries(store.list(), self.query.as_str());

        let clamped = clamp_page(self.page, total_pages(filtered.len(), self.page_size));
        if clamped != self.page {
            debug!(from = self.page, to = clamped, "Page clamped after catalog change");
            self.page = clamped;
        }

        let page = paginate(&filtered, PageRequest::new(self.page, self.page_size))?;
        let window = visible_pages(page.page, page.total_pages);

        Ok(ViewSnapshot {
            query: self.query.as_str().to_string(),
            library_total: store.len(),
            filtered_total: filtered.len(),
            window,
            page,
        })
    }
}

/// What an empty list screen should say
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyState {
    /// A search is active and nothing matched
    NoMatches,
    /// The catalog has no entries yet
    EmptyLibrary,
}

/// Everything a list screen renders, derived from one store read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    /// Search text in effect
    pub query: String,
    /// Entries in the whole catalog
    pub library_total: usize,
    /// Entries matching the search
    pub filtered_total: usize,
    /// Page navigation buttons
    pub window: Vec<PageSlot>,
    /// The entries on the current page
    pub page: Page<Entry>,
}

impl ViewSnapshot {
    /// Navigation controls are hidden for a single page
    pub fn show_pagination(&self) -> bool {
        self.page.total_pages > 1
    }

    /// Header line above the list
    pub fn count_label(&self) -> String {
        if self.query.is_empty() {
            format!("{} songs in your library", self.library_total)
        } else {
            format!(
                "Showing {} of {} songs",
                self.filtered_total, self.library_total
            )
        }
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.page.items.is_empty() {
            None
        } else if self.query.is_empty() {
            Some(EmptyState::EmptyLibrary)
        } else {
            Some(EmptyState::NoMatches)
        }
    }
}
