use anyhow::Result;

use crate::cli::ui::{select, short_id, status, text_input};
use crate::models::{validate_content, NoteCategory};
use crate::store::{BlobStore, NoteStore};

/// Execute the add command
pub fn run_add<B: BlobStore>(
    store: &NoteStore<B>,
    category: Option<NoteCategory>,
    content: Option<String>,
) -> Result<()> {
    let category = match category {
        Some(c) => c,
        None => match prompt_category()? {
            Some(c) => c,
            None => return Ok(()),
        },
    };

    let raw = match content {
        Some(text) => text,
        None => match text_input("note:", None)? {
            Some(text) => text,
            None => return Ok(()),
        },
    };
    let content = validate_content(&raw)?;

    let note = store.save(category, content)?;
    status(&format!("Saved {} note {}.", note.category.label(), short_id(&note.id)));

    Ok(())
}

fn prompt_category() -> Result<Option<NoteCategory>> {
    let labels: Vec<&str> = NoteCategory::ALL.iter().map(|c| c.label()).collect();
    Ok(select("category:", &labels)?.map(|idx| NoteCategory::ALL[idx]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBlobStore;

    #[test]
    fn test_add_with_args() {
        let store = NoteStore::new(MemoryBlobStore::new());
        run_add(&store, Some(NoteCategory::Life), Some("  water plants ".to_string())).unwrap();

        let notes = store.list_all();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].content, "water plants");
        assert_eq!(notes[0].category, NoteCategory::Life);
    }

    #[test]
    fn test_add_rejects_empty_content() {
        let store = NoteStore::new(MemoryBlobStore::new());
        assert!(run_add(&store, Some(NoteCategory::Life), Some("   ".to_string())).is_err());
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_add_write_failure_is_reported() {
        let blobs = MemoryBlobStore::new();
        blobs.fail_writes(true);
        let store = NoteStore::new(&blobs);
        let err = run_add(&store, Some(NoteCategory::Health), Some("nap".to_string())).unwrap_err();
        assert!(err.to_string().contains("failed to persist notes"));
    }
}
