use anyhow::Result;

use crate::cli::ui::{confirm, find_note, short_id, status};
use crate::models::{preview, DEFAULT_PREVIEW_LENGTH};
use crate::store::{BlobStore, NoteStore};

/// Execute the delete command
pub fn run_delete<B: BlobStore>(store: &NoteStore<B>, identifier: &str, force: bool) -> Result<()> {
    let Some(note) = find_note(store, identifier)? else {
        status(&format!("No note found with ID: {}", identifier.trim()));
        return Ok(());
    };

    if !force {
        let prompt = format!(
            "Delete \"{}\" ({})?",
            preview(&note.content, DEFAULT_PREVIEW_LENGTH),
            note.category.label()
        );
        if !confirm(&prompt)? {
            return Ok(());
        }
    }

    if store.delete(&note.id)? {
        status(&format!("Deleted note {}.", short_id(&note.id)));
    } else {
        status("Note was already deleted.");
    }

    Ok(())
}

/// Execute the clear command
pub fn run_clear<B: BlobStore>(store: &NoteStore<B>, force: bool) -> Result<()> {
    let total = store.list_all().len();

    if !force && !confirm(&format!("Delete all {} notes? This cannot be undone.", total))? {
        return Ok(());
    }

    store.delete_all()?;
    status("All notes deleted.");

    Ok(())
}
