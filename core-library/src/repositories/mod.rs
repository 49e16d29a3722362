//! # Catalog Storage
//!
//! The catalog store owns the ordered entry collection; the pagination
//! helpers slice any listing derived from it into pages and compute the
//! navigation window.
//!
//! ## Available Modules
//!
//! - `catalog` - `CatalogStore`, the in-memory source of truth
//! - `pagination` - `Page<T>`, `PageRequest`, `paginate`, `visible_pages`

pub mod catalog;
pub mod pagination;

pub use catalog::CatalogStore;
pub use pagination::{
    clamp_page, paginate, total_pages, visible_pages, Page, PageRequest, PageSlot,
    PAGE_WINDOW_WIDTH,
};
