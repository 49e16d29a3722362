//! Core service façade.
//!
//! This crate wires the runtime configuration, the catalog store, the list
//! view state and the event bus into a single object a presentation layer
//! drives. Mutations go through the façade so every successful create,
//! update or delete is announced on the event bus.

pub mod error;

pub use error::{CoreError, Result};

use core_library::sample::sample_entries;
use core_library::{CatalogStore, CatalogView, Entry, EntryFields, EntryId, PageSlot, ViewSnapshot};
use core_runtime::config::CatalogConfig;
use core_runtime::events::{CatalogEvent, CoreEvent, EventBus, Receiver};
use tracing::{debug, info, instrument};

/// Primary façade exposed to host applications.
///
/// One instance per session; independent instances share nothing.
#[derive(Debug)]
pub struct CatalogService {
    config: CatalogConfig,
    store: CatalogStore,
    view: CatalogView,
    events: EventBus,
}

impl CatalogService {
    /// Create a service, seeding the demo songs if the config asks for them.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let store = if config.seed_sample_library {
            CatalogStore::with_entries(sample_entries())?
        } else {
            CatalogStore::new()
        };

        Self::with_store(config, store)
    }

    /// Create a service around an existing store.
    pub fn with_store(config: CatalogConfig, store: CatalogStore) -> Result<Self> {
        config.validate()?;

        let view = CatalogView::new(config.page_size)?;
        let events = EventBus::new(config.event_buffer_size);

        info!(
            entries = store.len(),
            page_size = config.page_size,
            "Catalog service ready"
        );

        Ok(Self {
            config,
            store,
            view,
            events,
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// All entries, most recently created first
    pub fn list(&self) -> &[Entry] {
        self.store.list()
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.store.get(id)
    }

    /// Receive a [`CatalogEvent`] for every successful mutation from now on.
    pub fn subscribe(&self) -> Receiver<CoreEvent> {
        self.events.subscribe()
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn create(&mut self, draft: EntryFields) -> Result<Entry> {
        let entry = self.store.create(draft)?;
        self.publish(CatalogEvent::EntryAdded {
            entry_id: entry.id.to_string(),
            title: entry.title.clone(),
        });
        Ok(entry)
    }

    #[instrument(skip(self, id, draft), fields(entry_id = %id))]
    pub fn update(&mut self, id: &EntryId, draft: EntryFields) -> Result<Entry> {
        let entry = self.store.update(id, draft)?;
        self.publish(CatalogEvent::EntryUpdated {
            entry_id: entry.id.to_string(),
            title: entry.title.clone(),
        });
        Ok(entry)
    }

    #[instrument(skip(self, id), fields(entry_id = %id))]
    pub fn delete(&mut self, id: &EntryId) -> Result<Entry> {
        let entry = self.store.delete(id)?;
        self.publish(CatalogEvent::EntryRemoved {
            entry_id: entry.id.to_string(),
            title: entry.title.clone(),
        });
        Ok(entry)
    }

    /// Apply new search text, return to page 1 and render.
    pub fn search(&mut self, query: impl Into<String>) -> Result<ViewSnapshot> {
        self.view.set_query(query);
        self.snapshot()
    }

    /// Follow a page button. Ellipsis buttons leave the page unchanged.
    pub fn go_to(&mut self, slot: PageSlot) -> Result<ViewSnapshot> {
        self.view.go_to(slot);
        self.snapshot()
    }

    pub fn next_page(&mut self) -> Result<ViewSnapshot> {
        self.view.next_page(&self.store);
        self.snapshot()
    }

    pub fn previous_page(&mut self) -> Result<ViewSnapshot> {
        self.view.previous_page();
        self.snapshot()
    }

    /// Render the list screen from current state.
    pub fn snapshot(&mut self) -> Result<ViewSnapshot> {
        Ok(self.view.snapshot(&self.store)?)
    }

    fn publish(&self, event: CatalogEvent) {
        let notification = event.notification();
        info!(
            entry_id = event.entry_id(),
            title = %notification.title,
            "{}",
            notification.description
        );

        match self.events.emit(CoreEvent::Catalog(event)) {
            Ok(subscribers) => debug!(subscribers, "Catalog event delivered"),
            Err(_) => debug!("Catalog event dropped, no subscribers"),
        }
    }
}
