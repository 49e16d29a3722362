//! Demo songs for a freshly opened catalog.

use crate::models::{Entry, EntryFields, EntryId};

/// The five demo songs, ids `"1"` through `"5"`, in display order.
pub fn sample_entries() -> Vec<Entry> {
    [
        (
            "1",
            EntryFields::new("Bohemian Rhapsody", "Queen", "A Night at the Opera", 1975)
                .with_genre("Rock")
                .with_duration("5:55"),
        ),
        (
            "2",
            EntryFields::new("Hotel California", "Eagles", "Hotel California", 1976)
                .with_genre("Rock")
                .with_duration("6:30"),
        ),
        (
            "3",
            EntryFields::new("Billie Jean", "Michael Jackson", "Thriller", 1982)
                .with_genre("Pop")
                .with_duration("4:54"),
        ),
        (
            "4",
            EntryFields::new("Imagine", "John Lennon", "Imagine", 1971)
                .with_genre("Rock")
                .with_duration("3:07"),
        ),
        (
            "5",
            EntryFields::new("Like a Rolling Stone", "Bob Dylan", "Highway 61 Revisited", 1965)
                .with_genre("Folk Rock")
                .with_duration("6:13"),
        ),
    ]
    .into_iter()
    .map(|(id, fields)| Entry::from_fields(EntryId::from(id), fields))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::CatalogStore;

    #[test]
    fn test_sample_entries_seed_a_store() {
        let store = CatalogStore::with_entries(sample_entries()).unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(store.list()[0].title, "Bohemian Rhapsody");
        assert_eq!(store.list()[4].id.as_str(), "5");
    }
}
