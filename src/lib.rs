//! Song manager umbrella crate.
//!
//! Re-exports the workspace crates so a host application can depend on
//! `song-manager` alone: `runtime` for logging, configuration and events,
//! `library` for the catalog model and derived views, and the
//! [`CatalogService`] façade that ties them together.

pub use core_library as library;
pub use core_runtime as runtime;
pub use core_service::{CatalogService, CoreError, Result};
