//! # Core Configuration Module
//!
//! Provides configuration management for the song manager core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! `CatalogConfig`. `build()` validates every setting up front so a bad value
//! fails at startup with an actionable message instead of surfacing later as
//! a broken list screen.
//!
//! ## Usage
//!
//! ```
//! use core_runtime::config::CatalogConfig;
//!
//! let config = CatalogConfig::builder()
//!     .page_size(10)
//!     .seed_sample_library(true)
//!     .build()
//!     .expect("valid config");
//!
//! assert_eq!(config.page_size, 10);
//! ```
//!
//! ## Error Handling
//!
//! ```should_panic
//! use core_runtime::config::CatalogConfig;
//!
//! // A zero page size is rejected
//! let config = CatalogConfig::builder()
//!     .page_size(0)
//!     .build()
//!     .expect("Should fail - page size must be positive");
//! ```

use crate::error::{Error, Result};
use crate::events::DEFAULT_EVENT_BUFFER_SIZE;

/// Songs shown per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 4;

/// Upper bound on the page size.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Upper bound on the event bus capacity.
pub const MAX_EVENT_BUFFER_SIZE: usize = 65_536;

/// Settings for one catalog session.
///
/// Use [`CatalogConfigBuilder`] to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Entries per page in the list view
    pub page_size: u32,

    /// Capacity of the event bus channel
    pub event_buffer_size: usize,

    /// Start with the demo songs instead of an empty catalog
    pub seed_sample_library: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            event_buffer_size: DEFAULT_EVENT_BUFFER_SIZE,
            seed_sample_library: false,
        }
    }
}

impl CatalogConfig {
    /// Creates a new builder for constructing a `CatalogConfig`.
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - Page size is in `1..=1000`
    /// - Event buffer size is in `1..=65536`
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config(
                "Page size must be greater than 0".to_string(),
            ));
        }

        if self.page_size > MAX_PAGE_SIZE {
            return Err(Error::Config(format!(
                "Page size exceeds maximum of {}",
                MAX_PAGE_SIZE
            )));
        }

        if self.event_buffer_size == 0 {
            return Err(Error::Config(
                "Event buffer size must be greater than 0. \
                 Use the default of 100 unless subscribers lag."
                    .to_string(),
            ));
        }

        if self.event_buffer_size > MAX_EVENT_BUFFER_SIZE {
            return Err(Error::Config(format!(
                "Event buffer size exceeds maximum of {}",
                MAX_EVENT_BUFFER_SIZE
            )));
        }

        Ok(())
    }
}

/// Builder for [`CatalogConfig`]
#[derive(Debug, Default)]
pub struct CatalogConfigBuilder {
    page_size: Option<u32>,
    event_buffer_size: Option<usize>,
    seed_sample_library: bool,
}

impl CatalogConfigBuilder {
    /// Sets the number of entries per page.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Sets the event bus capacity.
    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.event_buffer_size = Some(size);
        self
    }

    /// Start the catalog with the demo songs.
    pub fn seed_sample_library(mut self, seed: bool) -> Self {
        self.seed_sample_library = seed;
        self
    }

    /// Builds the configuration, validating every field.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` describing the first invalid setting.
    pub fn build(self) -> Result<CatalogConfig> {
        let config = CatalogConfig {
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            event_buffer_size: self.event_buffer_size.unwrap_or(DEFAULT_EVENT_BUFFER_SIZE),
            seed_sample_library: self.seed_sample_library,
        };

        config.validate()?;
        Ok(config)
    }
}
