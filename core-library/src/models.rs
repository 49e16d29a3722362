//! Domain models for the song catalog
//!
//! This module contains the catalog entry model, the field payload used by
//! create/update, and the validation helpers shared with the presentation layer.

use crate::error::{LibraryError, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Earliest release year a form should accept.
pub const MIN_YEAR: i32 = 1900;

/// How many years past the current one a form should accept.
pub const MAX_YEARS_AHEAD: i32 = 5;

// =============================================================================
// ID Types
// =============================================================================

/// Unique identifier for a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// =============================================================================
// Domain Models
// =============================================================================

/// One song in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Store-assigned identifier, never changes after creation
    pub id: EntryId,
    /// Song title
    pub title: String,
    /// Performing artist
    pub artist: String,
    /// Album the song appears on
    pub album: String,
    /// Release year
    pub year: i32,
    /// Music genre
    pub genre: Option<String>,
    /// Free-form duration label such as "5:55"
    pub duration: Option<String>,
}

impl Entry {
    /// Combine an id with a field payload.
    pub fn from_fields(id: EntryId, fields: EntryFields) -> Self {
        Self {
            id,
            title: fields.title,
            artist: fields.artist,
            album: fields.album,
            year: fields.year,
            genre: fields.genre,
            duration: fields.duration,
        }
    }

    /// Everything except the id, e.g. to prefill an edit form.
    pub fn fields(&self) -> EntryFields {
        EntryFields {
            title: self.title.clone(),
            artist: self.artist.clone(),
            album: self.album.clone(),
            year: self.year,
            genre: self.genre.clone(),
            duration: self.duration.clone(),
        }
    }

    /// Replace every field except the id.
    pub(crate) fn apply(&mut self, fields: EntryFields) {
        self.title = fields.title;
        self.artist = fields.artist;
        self.album = fields.album;
        self.year = fields.year;
        self.genre = fields.genre;
        self.duration = fields.duration;
    }
}

/// Entry payload without an id, accepted by create and update
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryFields {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: i32,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

impl EntryFields {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            year,
            genre: None,
            duration: None,
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Check that title, artist and album are present.
    ///
    /// Whitespace-only values count as missing.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("title", &self.title),
            ("artist", &self.artist),
            ("album", &self.album),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(LibraryError::invalid(
                    field,
                    format!("{} cannot be empty", field),
                ));
            }
        }

        Ok(())
    }

    /// Trim the required fields and drop blank optional ones.
    ///
    /// Forms submit `""` for untouched optional inputs; those become `None`.
    /// The store keeps fields exactly as passed, so callers opt in here.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            artist: self.artist.trim().to_string(),
            album: self.album.trim().to_string(),
            year: self.year,
            genre: non_blank(self.genre),
            duration: non_blank(self.duration),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// The current calendar year in UTC.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Range check a form applies to the year input.
///
/// The store itself accepts any year; this is offered to callers that want the
/// `[1900, current_year + 5]` rule.
pub fn validate_year(year: i32, current_year: i32) -> Result<()> {
    let max = current_year + MAX_YEARS_AHEAD;
    if (MIN_YEAR..=max).contains(&year) {
        Ok(())
    } else {
        Err(LibraryError::invalid(
            "year",
            format!("year must be between {} and {}", MIN_YEAR, max),
        ))
    }
}
