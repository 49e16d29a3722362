//! End-to-end behaviour of the catalog façade

use core_library::{EmptyState, EntryFields, EntryId, PageSlot};
use core_runtime::config::CatalogConfig;
use core_runtime::events::{CatalogEvent, CoreEvent};
use core_service::CatalogService;

fn seeded() -> CatalogService {
    let config = CatalogConfig::builder()
        .seed_sample_library(true)
        .build()
        .unwrap();
    CatalogService::new(config).unwrap()
}

fn song(title: &str) -> EntryFields {
    EntryFields::new(title, "Test Artist", "Test Album", 2024)
}

#[test]
fn test_empty_service_by_default() {
    let mut service = CatalogService::new(CatalogConfig::default()).unwrap();
    assert!(service.list().is_empty());

    let snap = service.snapshot().unwrap();
    assert_eq!(snap.empty_state(), Some(EmptyState::EmptyLibrary));
    assert_eq!(snap.count_label(), "0 songs in your library");
}

#[test]
fn test_seeded_first_page() {
    let mut service = seeded();
    let snap = service.snapshot().unwrap();

    assert_eq!(snap.page.items.len(), 4);
    assert_eq!(snap.page.total_pages, 2);
    assert_eq!(snap.page.summary().as_deref(), Some("Showing 1-4 of 5"));

    let snap = service.next_page().unwrap();
    assert_eq!(snap.page.items.len(), 1);
    assert_eq!(snap.page.items[0].title, "Like a Rolling Stone");
    assert_eq!(snap.page.summary().as_deref(), Some("Showing 5-5 of 5"));
}

#[test]
fn test_create_emits_added_event() {
    let mut service = seeded();
    let mut events = service.subscribe();

    let entry = service.create(song("Fresh")).unwrap();
    assert_eq!(service.list()[0], entry);

    let CoreEvent::Catalog(event) = events.try_recv().unwrap();
    assert_eq!(
        event,
        CatalogEvent::EntryAdded {
            entry_id: entry.id.to_string(),
            title: "Fresh".to_string(),
        }
    );
    assert_eq!(
        event.notification().description,
        "\"Fresh\" has been added to your library."
    );
}

#[test]
fn test_update_and_delete_emit_events() {
    let mut service = seeded();
    let mut events = service.subscribe();
    let id = EntryId::from("4");

    let updated = service
        .update(&id, song("Imagine (Remastered)").with_genre("Rock"))
        .unwrap();
    assert_eq!(updated.id, id);

    let removed = service.delete(&id).unwrap();
    assert_eq!(removed.title, "Imagine (Remastered)");

    let CoreEvent::Catalog(first) = events.try_recv().unwrap();
    assert_eq!(first.notification().title, "Song updated");
    let CoreEvent::Catalog(second) = events.try_recv().unwrap();
    assert_eq!(
        second.notification().description,
        "\"Imagine (Remastered)\" has been removed from your library."
    );
}

#[test]
fn test_failed_mutations_emit_nothing() {
    let mut service = seeded();
    let mut events = service.subscribe();

    let mut blank = song("x");
    blank.title = String::new();
    let err = service.create(blank).unwrap_err();
    assert!(err.is_invalid_input());

    let err = service.delete(&EntryId::from("missing")).unwrap_err();
    assert!(err.is_not_found());

    assert!(events.try_recv().is_err());
    assert_eq!(service.list().len(), 5);
}

#[test]
fn test_search_resets_page() {
    let mut service = seeded();
    service.go_to(PageSlot::Page(2)).unwrap();

    let snap = service.search("ROCK").unwrap();
    assert_eq!(snap.page.page, 1);
    assert_eq!(snap.filtered_total, 4);
    assert_eq!(snap.count_label(), "Showing 4 of 5 songs");
    assert!(!snap.show_pagination());

    let snap = service.search("zzz").unwrap();
    assert_eq!(snap.empty_state(), Some(EmptyState::NoMatches));
}

#[test]
fn test_ellipsis_does_not_navigate() {
    let config = CatalogConfig::builder().page_size(1).build().unwrap();
    let mut service = CatalogService::new(config).unwrap();
    for n in 0..10 {
        service.create(song(&format!("Song {}", n))).unwrap();
    }

    let snap = service.snapshot().unwrap();
    assert_eq!(
        snap.window,
        vec![
            PageSlot::Page(1),
            PageSlot::Page(2),
            PageSlot::Page(3),
            PageSlot::Page(4),
            PageSlot::Ellipsis,
            PageSlot::Page(10),
        ]
    );

    let snap = service.go_to(PageSlot::Ellipsis).unwrap();
    assert_eq!(snap.page.page, 1);

    let snap = service.go_to(PageSlot::Page(6)).unwrap();
    assert_eq!(
        snap.window,
        vec![
            PageSlot::Page(1),
            PageSlot::Ellipsis,
            PageSlot::Page(5),
            PageSlot::Page(6),
            PageSlot::Page(7),
            PageSlot::Ellipsis,
            PageSlot::Page(10),
        ]
    );
}

#[test]
fn test_deleting_last_item_on_last_page_falls_back() {
    let mut service = seeded();
    let snap = service.go_to(PageSlot::Page(2)).unwrap();
    let last = snap.page.items[0].id.clone();

    service.delete(&last).unwrap();
    let snap = service.snapshot().unwrap();
    assert_eq!(snap.page.page, 1);
    assert_eq!(snap.page.total_pages, 1);
    assert_eq!(snap.page.items.len(), 4);
}

#[test]
fn test_oversized_event_buffer_is_a_config_error() {
    let config = CatalogConfig {
        event_buffer_size: usize::MAX,
        ..CatalogConfig::default()
    };

    let err = CatalogService::new(config).unwrap_err();
    assert!(matches!(err, core_service::CoreError::Runtime(_)));
}

#[test]
fn test_update_stores_fields_verbatim() {
    let mut service = seeded();
    let created = service.create(song("Draft")).unwrap();

    let replacement = EntryFields::new("Final ", "Test Artist", "Test Album", 2024).with_genre("");
    let updated = service.update(&created.id, replacement.clone()).unwrap();

    assert_eq!(updated.title, "Final ");
    assert_eq!(updated.genre.as_deref(), Some(""));
    assert_eq!(updated.fields(), replacement);
}

#[test]
fn test_services_are_independent() {
    let mut a = seeded();
    let b = seeded();
    a.create(song("Only in A")).unwrap();
    assert_eq!(a.list().len(), 6);
    assert_eq!(b.list().len(), 5);
}

#[tokio::test]
async fn test_async_subscriber_receives_events() {
    let mut service = seeded();
    let mut events = service.subscribe();

    service.create(song("Async")).unwrap();

    let CoreEvent::Catalog(event) = events.recv().await.unwrap();
    assert!(matches!(event, CatalogEvent::EntryAdded { ref title, .. } if title == "Async"));
}
