//! Derived, read-only views over the note collection.
//!
//! The free functions work on any slice so strict callers can pair them
//! with [`NoteStore::try_list_all`]. The `NoteStore` methods are best-effort
//! and see an unreadable store as empty.

use crate::models::{CategoryMap, Note, NoteCategory};

use super::{BlobStore, NoteStore};

/// Number of notes per category shown on the summary view
pub const DEFAULT_LATEST_LIMIT: usize = 3;

/// Sort most recent first by effective time; ties keep their order
pub fn sort_by_recency(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.effective_time().cmp(&a.effective_time()));
}

pub fn filter_by_category(notes: &[Note], category: NoteCategory) -> Vec<Note> {
    notes
        .iter()
        .filter(|n| n.category == category)
        .cloned()
        .collect()
}

/// Partition by category, newest first, at most `limit` per category
pub fn group_latest(notes: &[Note], limit: usize) -> CategoryMap<Vec<Note>> {
    let mut grouped: CategoryMap<Vec<Note>> = CategoryMap::default();
    for note in notes {
        grouped[note.category].push(note.clone());
    }
    for category in NoteCategory::ALL {
        let bucket = &mut grouped[category];
        sort_by_recency(bucket);
        bucket.truncate(limit);
    }
    grouped
}

pub fn count_by_category(notes: &[Note]) -> CategoryMap<usize> {
    let mut counts: CategoryMap<usize> = CategoryMap::default();
    for note in notes {
        counts[note.category] += 1;
    }
    counts
}

impl<B: BlobStore> NoteStore<B> {
    pub fn list_by_category(&self, category: NoteCategory) -> Vec<Note> {
        filter_by_category(&self.list_all(), category)
    }

    pub fn list_all_sorted(&self) -> Vec<Note> {
        let mut notes = self.list_all();
        sort_by_recency(&mut notes);
        notes
    }

    pub fn grouped_latest(&self, limit: usize) -> CategoryMap<Vec<Note>> {
        group_latest(&self.list_all(), limit)
    }

    pub fn counts_by_category(&self) -> CategoryMap<usize> {
        count_by_category(&self.list_all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryBlobStore, NOTES_KEY};

    fn note(id: &str, category: NoteCategory, created_at: i64, updated_at: Option<i64>) -> Note {
        Note {
            id: id.to_string(),
            category,
            content: format!("content {}", id),
            created_at,
            updated_at,
        }
    }

    fn store_with(notes: &[Note]) -> NoteStore<MemoryBlobStore> {
        let blobs = MemoryBlobStore::new();
        blobs
            .set(NOTES_KEY, &serde_json::to_string(notes).unwrap())
            .unwrap();
        NoteStore::new(blobs)
    }

    fn ids(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_legacy_fallback_ordering() {
        let mut notes = vec![
            note("A", NoteCategory::Life, 100, None),
            note("B", NoteCategory::Life, 50, Some(200)),
        ];
        sort_by_recency(&mut notes);
        assert_eq!(ids(&notes), vec!["B", "A"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut notes = vec![
            note("first", NoteCategory::Life, 10, Some(10)),
            note("newest", NoteCategory::Health, 5, Some(30)),
            note("second", NoteCategory::WorkStudy, 10, None),
        ];
        sort_by_recency(&mut notes);
        assert_eq!(ids(&notes), vec!["newest", "first", "second"]);
    }

    #[test]
    fn test_list_all_sorted() {
        let store = store_with(&[
            note("old", NoteCategory::Life, 1, Some(1)),
            note("edited", NoteCategory::Life, 2, Some(9)),
            note("new", NoteCategory::Health, 5, Some(5)),
        ]);
        assert_eq!(ids(&store.list_all_sorted()), vec!["edited", "new", "old"]);
        // the stored order is untouched
        assert_eq!(ids(&store.list_all()), vec!["old", "edited", "new"]);
    }

    #[test]
    fn test_grouped_latest_has_every_category() {
        let store = store_with(&[]);
        let grouped = store.grouped_latest(DEFAULT_LATEST_LIMIT);
        for (_, bucket) in grouped.iter() {
            assert!(bucket.is_empty());
        }
    }

    #[test]
    fn test_grouped_latest_truncates_and_sorts() {
        let notes: Vec<Note> = (0..5)
            .map(|i| note(&format!("w{}", i), NoteCategory::WorkStudy, i, Some(i)))
            .chain(std::iter::once(note("l0", NoteCategory::Life, 3, None)))
            .collect();
        let grouped = group_latest(&notes, 3);

        assert_eq!(ids(&grouped[NoteCategory::WorkStudy]), vec!["w4", "w3", "w2"]);
        assert_eq!(ids(&grouped[NoteCategory::Life]), vec!["l0"]);
        assert!(grouped[NoteCategory::Health].is_empty());

        for (_, bucket) in grouped.iter() {
            assert!(bucket.len() <= 3);
            assert!(bucket
                .windows(2)
                .all(|w| w[0].effective_time() >= w[1].effective_time()));
        }
    }

    #[test]
    fn test_grouped_latest_zero_limit() {
        let notes = vec![note("a", NoteCategory::Life, 1, None)];
        let grouped = group_latest(&notes, 0);
        assert!(grouped[NoteCategory::Life].is_empty());
    }

    #[test]
    fn test_counts_sum_matches_total() {
        let store = store_with(&[
            note("1", NoteCategory::Life, 1, None),
            note("2", NoteCategory::Health, 2, None),
            note("3", NoteCategory::Life, 3, None),
            note("4", NoteCategory::WorkStudy, 4, None),
        ]);
        let counts = store.counts_by_category();
        let total: usize = counts.iter().map(|(_, n)| *n).sum();
        assert_eq!(total, store.list_all().len());
    }

    #[test]
    fn test_scenario_counts_and_category_listing() {
        let store = NoteStore::new(MemoryBlobStore::new());
        let first = store.save(NoteCategory::WorkStudy, "report").unwrap();
        store.save(NoteCategory::Life, "groceries").unwrap();
        let third = store.save(NoteCategory::WorkStudy, "exam").unwrap();

        let counts = store.counts_by_category();
        assert_eq!(counts[NoteCategory::WorkStudy], 2);
        assert_eq!(counts[NoteCategory::Life], 1);
        assert_eq!(counts[NoteCategory::Health], 0);

        let work = store.list_by_category(NoteCategory::WorkStudy);
        assert_eq!(work, vec![first, third]);
    }

    #[test]
    fn test_queries_on_unreadable_store_are_empty() {
        let blobs = MemoryBlobStore::new();
        let store = NoteStore::new(&blobs);
        store.save(NoteCategory::Health, "walk").unwrap();
        blobs.fail_reads(true);

        assert!(store.list_all_sorted().is_empty());
        assert!(store.list_by_category(NoteCategory::Health).is_empty());
        assert_eq!(store.counts_by_category(), CategoryMap::default());
        assert!(store.grouped_latest(3)[NoteCategory::Health].is_empty());
    }
}
