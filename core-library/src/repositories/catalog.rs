//! In-memory catalog store
//!
//! The store owns the authoritative, ordered list of entries. New entries are
//! placed first; updates keep an entry's position; deletes remove it outright.

use crate::error::{LibraryError, Result};
use crate::models::{Entry, EntryFields, EntryId};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Ordered collection of catalog entries with create/update/delete operations.
///
/// Each store is an independent object; a host may keep as many as it likes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStore {
    entries: Vec<Entry>,
}

impl CatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `entries` in the given order.
    ///
    /// # Errors
    /// Returns `InvalidInput` if two entries share an id or an entry is missing
    /// a required field.
    pub fn with_entries(entries: Vec<Entry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            entry.fields().validate()?;
            if !seen.insert(entry.id.clone()) {
                return Err(LibraryError::invalid(
                    "id",
                    format!("duplicate entry id {}", entry.id),
                ));
            }
        }

        debug!(count = entries.len(), "Catalog store seeded");
        Ok(Self { entries })
    }

    /// Current entries, most recently created first
    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    /// Find an entry by id
    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a new entry at the front of the catalog
    ///
    /// # Errors
    /// Returns `InvalidInput` if title, artist or album is empty. The store is
    /// left unchanged.
    pub fn create(&mut self, fields: EntryFields) -> Result<Entry> {
        if let Err(e) = fields.validate() {
            warn!(error = %e, "Rejected new entry");
            return Err(e);
        }

        let id = self.fresh_id();
        let entry = Entry::from_fields(id, fields);
        self.entries.insert(0, entry.clone());

        info!(entry_id = %entry.id, title = %entry.title, "Entry created");
        Ok(entry)
    }

    /// Replace all fields of an existing entry, keeping its id and position
    ///
    /// # Errors
    /// Returns error if:
    /// - No entry has `id` (`NotFound`)
    /// - A required field is empty (`InvalidInput`)
    pub fn update(&mut self, id: &EntryId, fields: EntryFields) -> Result<Entry> {
        let Some(entry) = self.entries.iter_mut().find(|entry| &entry.id == id) else {
            warn!(entry_id = %id, "Update of unknown entry");
            return Err(LibraryError::entry_not_found(id.as_str()));
        };

        if let Err(e) = fields.validate() {
            warn!(entry_id = %id, error = %e, "Rejected entry update");
            return Err(e);
        }

        entry.apply(fields);
        info!(entry_id = %entry.id, title = %entry.title, "Entry updated");
        Ok(entry.clone())
    }

    /// Remove an entry and hand it back
    ///
    /// # Errors
    /// Returns `NotFound` if no entry has `id`.
    pub fn delete(&mut self, id: &EntryId) -> Result<Entry> {
        let Some(index) = self.entries.iter().position(|entry| &entry.id == id) else {
            warn!(entry_id = %id, "Delete of unknown entry");
            return Err(LibraryError::entry_not_found(id.as_str()));
        };

        let entry = self.entries.remove(index);
        info!(entry_id = %entry.id, title = %entry.title, "Entry deleted");
        Ok(entry)
    }

    // v4 collisions are practically impossible, but seeded ids are arbitrary
    // strings so check anyway.
    fn fresh_id(&self) -> EntryId {
        loop {
            let id = EntryId::new();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
