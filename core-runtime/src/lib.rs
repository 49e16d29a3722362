//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the song manager core:
//! - Logging and tracing infrastructure
//! - Configuration management
//! - Event bus system
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the catalog façade depends on.
//! It establishes the logging conventions and the event broadcasting
//! mechanism used to announce catalog changes.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;

pub use error::{Error, Result};
