use anyhow::Result;

use crate::cli::ui::{format_timestamp, short_id, status};
use crate::models::{preview, Note, NoteCategory, DEFAULT_PREVIEW_LENGTH};
use crate::store::{BlobStore, NoteStore};

/// Message shown whenever there is nothing to list
pub const NO_NOTES: &str = "No notes yet.";

/// Execute the list command
pub fn run_list<B: BlobStore>(
    store: &NoteStore<B>,
    category: Option<NoteCategory>,
    limit: Option<usize>,
) -> Result<()> {
    let mut notes = match category {
        Some(c) => store.list_by_category(c),
        None => store.list_all_sorted(),
    };
    if let Some(limit) = limit {
        notes.truncate(limit);
    }

    if notes.is_empty() {
        status(NO_NOTES);
        return Ok(());
    }

    for note in &notes {
        println!("{}", format_row(note));
    }

    Ok(())
}

/// One list line: short id, category, last activity, preview
pub fn format_row(note: &Note) -> String {
    format!(
        "{:<8}  {:<19}  {}  {}",
        short_id(&note.id),
        note.category.label(),
        format_timestamp(note.effective_time()),
        preview(&note.content, DEFAULT_PREVIEW_LENGTH).replace('\n', " ")
    )
}
