//! # Song Catalog Module
//!
//! Owns the in-memory song catalog and the derived views a list screen needs.
//!
//! ## Overview
//!
//! This module manages:
//! - The `Entry` model and required-field validation
//! - `CatalogStore`, an ordered collection with create/update/delete
//! - Case-insensitive search filtering
//! - 1-based pagination and the page-number window for navigation bars
//! - `CatalogView`, which recomputes filter and page on every read

pub mod error;
pub mod models;
pub mod query;
pub mod repositories;
pub mod sample;
pub mod view;

pub use error::{LibraryError, Result};
pub use models::{Entry, EntryFields, EntryId};
pub use query::{filter_entries, SearchQuery};
pub use repositories::{paginate, visible_pages, CatalogStore, Page, PageRequest, PageSlot};
pub use view::{CatalogView, EmptyState, ViewSnapshot};
