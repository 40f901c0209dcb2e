use anyhow::Result;

use crate::cli::ui::{find_note, short_id, status, text_input};
use crate::models::{validate_content, NoteCategory, NotePatch};
use crate::store::{BlobStore, NoteStore};

/// Execute the edit command
pub fn run_edit<B: BlobStore>(
    store: &NoteStore<B>,
    identifier: &str,
    category: Option<NoteCategory>,
    content: Option<String>,
) -> Result<()> {
    let Some(note) = find_note(store, identifier)? else {
        status(&format!("No note found with ID: {}", identifier.trim()));
        return Ok(());
    };

    // No flags: edit the content in place
    let content = match (category, content) {
        (None, None) => match text_input("note:", Some(&note.content))? {
            Some(text) => Some(text),
            None => return Ok(()),
        },
        (_, content) => content,
    };

    let patch = NotePatch {
        category,
        content: content.as_deref().map(validate_content).transpose()?,
    };

    match store.update(&note.id, patch)? {
        Some(updated) => status(&format!("Updated note {}.", short_id(&updated.id))),
        // deleted between lookup and update
        None => status(&format!("No note found with ID: {}", identifier.trim())),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBlobStore;

    #[test]
    fn test_edit_category_only() {
        let store = NoteStore::new(MemoryBlobStore::new());
        let note = store.save(NoteCategory::Life, "yoga").unwrap();

        run_edit(&store, &note.id[..8], Some(NoteCategory::Health), None).unwrap();

        let edited = store.get(&note.id).unwrap();
        assert_eq!(edited.category, NoteCategory::Health);
        assert_eq!(edited.content, "yoga");
        assert_eq!(edited.created_at, note.created_at);
    }

    #[test]
    fn test_edit_content_is_validated() {
        let store = NoteStore::new(MemoryBlobStore::new());
        let note = store.save(NoteCategory::Life, "yoga").unwrap();

        assert!(run_edit(&store, &note.id, None, Some("x".repeat(201))).is_err());
        run_edit(&store, &note.id, None, Some(" pilates ".to_string())).unwrap();
        assert_eq!(store.get(&note.id).unwrap().content, "pilates");
    }

    #[test]
    fn test_edit_missing_note_is_not_an_error() {
        let store = NoteStore::new(MemoryBlobStore::new());
        run_edit(&store, "missing", None, Some("x".to_string())).unwrap();
        assert!(store.list_all().is_empty());
    }
}
