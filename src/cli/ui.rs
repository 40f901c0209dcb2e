use anyhow::{anyhow, Result};
use chrono::{Local, TimeZone};
use inquire::ui::RenderConfig;
use inquire::{Confirm, Select, Text};

use crate::models::Note;
use crate::store::{BlobStore, NoteStore};

/// Characters of the id shown in list rows
pub const SHORT_ID_LEN: usize = 8;

// ============================================================================
// Message Functions
// ============================================================================

/// Print a status message to stdout
#[inline]
pub fn status(msg: &str) {
    println!("{}", msg);
}

/// Print a warning message to stderr
#[inline]
pub fn warning(msg: &str) {
    eprintln!("Warning: {}", msg);
}

// ============================================================================
// Formatting
// ============================================================================

pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

/// Local "YYYY-MM-DD HH:MM" for a millisecond timestamp
pub fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => "?".to_string(),
    }
}

// ============================================================================
// Lookup
// ============================================================================

/// Find a note by exact id, else by unique id prefix
pub fn find_note<B: BlobStore>(store: &NoteStore<B>, identifier: &str) -> Result<Option<Note>> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(anyhow!("Identifier cannot be empty."));
    }

    let notes = store.list_all();
    if let Some(note) = notes.iter().find(|n| n.id == identifier) {
        return Ok(Some(note.clone()));
    }

    let mut matches = notes.into_iter().filter(|n| n.id.starts_with(identifier));
    match (matches.next(), matches.next()) {
        (Some(note), None) => Ok(Some(note)),
        (None, _) => Ok(None),
        (Some(_), Some(_)) => Err(anyhow!(
            "'{}' matches more than one note; use a longer id.",
            identifier
        )),
    }
}

// ============================================================================
// Prompts
// ============================================================================

/// Get a minimal render config for inquire prompts
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Display a selection menu and return the chosen index
pub fn select<T: ToString>(prompt: &str, options: &[T]) -> Result<Option<usize>> {
    if options.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = options.iter().map(|o| o.to_string()).collect();

    let result = Select::new(prompt, items.clone())
        .with_render_config(minimal_render_config())
        .with_vim_mode(true)
        .prompt_skippable()?;

    Ok(result.and_then(|selected| items.iter().position(|i| *i == selected)))
}

/// Prompt for text input with optional default value
pub fn text_input(prompt: &str, default: Option<&str>) -> Result<Option<String>> {
    let mut builder = Text::new(prompt).with_render_config(minimal_render_config());

    if let Some(d) = default {
        if !d.is_empty() {
            builder = builder.with_default(d);
        }
    }

    let result = builder.prompt_skippable()?;
    Ok(result)
}

/// Prompt for yes/no confirmation (default: no)
pub fn confirm(prompt: &str) -> Result<bool> {
    let result = Confirm::new(prompt)
        .with_render_config(minimal_render_config())
        .with_default(false)
        .prompt()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteCategory;
    use crate::store::{MemoryBlobStore, NOTES_KEY};

    fn store_with_ids(ids: &[&str]) -> NoteStore<MemoryBlobStore> {
        let notes: Vec<Note> = ids
            .iter()
            .map(|id| Note {
                id: id.to_string(),
                category: NoteCategory::Life,
                content: "x".to_string(),
                created_at: 1,
                updated_at: None,
            })
            .collect();
        let blobs = MemoryBlobStore::new();
        blobs
            .set(NOTES_KEY, &serde_json::to_string(&notes).unwrap())
            .unwrap();
        NoteStore::new(blobs)
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("123"), "123");
    }

    #[test]
    fn test_find_note_exact_and_prefix() {
        let store = store_with_ids(&["abc123", "abd456", "17000"]);

        assert_eq!(find_note(&store, "abc123").unwrap().unwrap().id, "abc123");
        assert_eq!(find_note(&store, "abd").unwrap().unwrap().id, "abd456");
        assert_eq!(find_note(&store, " 17000 ").unwrap().unwrap().id, "17000");
        assert!(find_note(&store, "zzz").unwrap().is_none());
    }

    #[test]
    fn test_find_note_ambiguous_prefix() {
        let store = store_with_ids(&["abc123", "abd456"]);
        assert!(find_note(&store, "ab").is_err());
        assert!(find_note(&store, "  ").is_err());
    }

    #[test]
    fn test_exact_match_beats_prefix() {
        let store = store_with_ids(&["17", "170"]);
        assert_eq!(find_note(&store, "17").unwrap().unwrap().id, "17");
    }
}
