//! Pagination helpers for catalog listings
//!
//! Pages are 1-based. An empty listing still reports one (empty) page, and a
//! page past the end yields no items rather than an error.

use crate::error::{LibraryError, Result};
use serde::{Deserialize, Serialize};

/// Number of page buttons a navigation bar shows before collapsing into ellipses.
pub const PAGE_WINDOW_WIDTH: u32 = 5;

/// Pagination request parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Current page number (1-indexed)
    pub page: u32,
    /// Number of items per page
    pub page_size: u32,
}

impl PageRequest {
    /// Create a new page request
    ///
    /// # Examples
    ///
    /// ```
    /// use core_library::repositories::PageRequest;
    ///
    /// let request = PageRequest::new(1, 4);
    /// assert_eq!(request.page, 1);
    /// assert_eq!(request.page_size, 4);
    /// ```
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) as usize * self.page_size as usize
    }

    /// Get the LIMIT value (same as page_size)
    pub fn limit(&self) -> usize {
        self.page_size as usize
    }

    fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(LibraryError::invalid("page", "page numbers start at 1"));
        }
        if self.page_size == 0 {
            return Err(LibraryError::invalid(
                "page_size",
                "page size must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 4,
        }
    }
}

/// Paginated response containing items and metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in the current page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: usize,
    /// Current page number
    pub page: u32,
    /// Total number of pages, never less than 1
    pub total_pages: u32,
    /// Number of items per page
    pub page_size: u32,
}

impl<T> Page<T> {
    /// Create a new paginated response
    ///
    /// # Examples
    ///
    /// ```
    /// use core_library::repositories::{Page, PageRequest};
    ///
    /// let page = Page::new(vec![1, 2, 3], 25, PageRequest::new(1, 10));
    ///
    /// assert_eq!(page.items.len(), 3);
    /// assert_eq!(page.total, 25);
    /// assert_eq!(page.total_pages, 3);
    /// ```
    pub fn new(items: Vec<T>, total: usize, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            total_pages: total_pages(total, request.page_size),
            page_size: request.page_size,
        }
    }

    /// Check if there are more pages after the current one
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Check if there are pages before the current one
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// 1-based inclusive positions of the shown items within the full listing.
    ///
    /// `None` when the page holds nothing.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let start = PageRequest::new(self.page, self.page_size).offset() + 1;
        Some((start, start + self.items.len() - 1))
    }

    /// Footer text such as `Showing 5-5 of 5`
    pub fn summary(&self) -> Option<String> {
        self.item_range()
            .map(|(start, end)| format!("Showing {}-{} of {}", start, end, self.total))
    }

    /// Map the items to a different type
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            total_pages: self.total_pages,
            page_size: self.page_size,
        }
    }
}

/// `ceil(total / page_size)`, with an empty listing counted as one page.
pub fn total_pages(total: usize, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total.div_ceil(page_size as usize).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Clamp a page number into `[1, total_pages]`.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Slice one page out of `items`.
///
/// # Errors
/// Returns `InvalidInput` if `request.page` or `request.page_size` is zero.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Result<Page<T>> {
    request.validate()?;

    let start = request.offset().min(items.len());
    let end = start.saturating_add(request.limit()).min(items.len());

    Ok(Page::new(items[start..end].to_vec(), items.len(), request))
}

/// One button in a page navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSlot {
    /// A selectable page number
    Page(u32),
    /// Placeholder for skipped pages, never selectable
    Ellipsis,
}

impl PageSlot {
    /// The page this slot navigates to, if any
    pub fn page(&self) -> Option<u32> {
        match self {
            PageSlot::Page(n) => Some(*n),
            PageSlot::Ellipsis => None,
        }
    }
}

/// Page numbers and ellipses to render for `current` out of `total` pages.
///
/// # Examples
///
/// ```
/// use core_library::repositories::{visible_pages, PageSlot::{Ellipsis, Page}};
///
/// assert_eq!(
///     visible_pages(6, 10),
///     vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Ellipsis, Page(10)]
/// );
/// ```
pub fn visible_pages(current: u32, total: u32) -> Vec<PageSlot> {
    use PageSlot::{Ellipsis, Page};

    if total <= PAGE_WINDOW_WIDTH {
        return (1..=total).map(Page).collect();
    }

    if current <= 3 {
        let mut slots: Vec<_> = (1..=4).map(Page).collect();
        slots.extend([Ellipsis, Page(total)]);
        slots
    } else if current >= total - 2 {
        let mut slots = vec![Page(1), Ellipsis];
        slots.extend((total - 3..=total).map(Page));
        slots
    } else {
        let mut slots = vec![Page(1), Ellipsis];
        slots.extend((current - 1..=current + 1).map(Page));
        slots.extend([Ellipsis, Page(total)]);
        slots
    }
}
