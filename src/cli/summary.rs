use anyhow::Result;

use crate::cli::list::NO_NOTES;
use crate::cli::ui::short_id;
use crate::models::{preview, CategoryMap, Note, DEFAULT_PREVIEW_LENGTH};
use crate::store::{BlobStore, NoteStore};

/// Execute the summary command
pub fn run_summary<B: BlobStore>(store: &NoteStore<B>, limit: usize) -> Result<()> {
    let counts = store.counts_by_category();
    let latest = store.grouped_latest(limit);
    println!("{}", format_summary(&counts, &latest));
    Ok(())
}

/// Every category with its count and latest notes, empty ones included
pub fn format_summary(counts: &CategoryMap<usize>, latest: &CategoryMap<Vec<Note>>) -> String {
    let mut lines = Vec::new();

    for (category, notes) in latest.iter() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("{} ({})", category.label(), counts[category]));
        if notes.is_empty() {
            lines.push(format!("  {}", NO_NOTES));
        }
        for note in notes {
            lines.push(format!(
                "  {}  {}",
                short_id(&note.id),
                preview(&note.content, DEFAULT_PREVIEW_LENGTH).replace('\n', " ")
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteCategory;
    use crate::store::MemoryBlobStore;

    #[test]
    fn test_summary_lists_every_category() {
        let store = NoteStore::new(MemoryBlobStore::new());
        store.save(NoteCategory::WorkStudy, "report").unwrap();
        store.save(NoteCategory::Life, "groceries").unwrap();
        store.save(NoteCategory::WorkStudy, "exam").unwrap();

        let text = format_summary(&store.counts_by_category(), &store.grouped_latest(3));
        assert!(text.contains("Work and study (2)"));
        assert!(text.contains("Home life (1)"));
        assert!(text.contains("Health and wellness (0)\n  No notes yet."));
        assert!(text.contains("report"));
        assert!(text.contains("groceries"));
    }

    #[test]
    fn test_summary_respects_limit() {
        let store = NoteStore::new(MemoryBlobStore::new());
        for i in 0..5 {
            store.save(NoteCategory::Life, format!("item {}", i)).unwrap();
        }

        let text = format_summary(&store.counts_by_category(), &store.grouped_latest(2));
        assert!(text.contains("Home life (5)"));
        assert_eq!(text.matches("item ").count(), 2);
    }
}
