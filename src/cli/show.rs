use anyhow::Result;

use crate::cli::ui::{find_note, format_timestamp, status};
use crate::models::Note;
use crate::store::{BlobStore, NoteStore};

/// Execute the show command
pub fn run_show<B: BlobStore>(store: &NoteStore<B>, identifier: &str) -> Result<()> {
    match find_note(store, identifier)? {
        Some(note) => println!("{}", format_detail(&note)),
        None => status(&format!("No note found with ID: {}", identifier.trim())),
    }
    Ok(())
}

/// Full note: header lines, then the content verbatim
pub fn format_detail(note: &Note) -> String {
    let mut lines = vec![
        note.category.label().to_string(),
        format!("  id       {}", note.id),
        format!("  created  {}", format_timestamp(note.created_at)),
    ];
    if let Some(updated) = note.updated_at.filter(|_| note.was_edited()) {
        lines.push(format!("  updated  {}", format_timestamp(updated)));
    }
    lines.push(String::new());
    lines.push(note.content.clone());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteCategory;

    #[test]
    fn test_format_detail() {
        let mut note = Note::new_at(NoteCategory::WorkStudy, "Read chapter 4".to_string(), 1_000);
        let detail = format_detail(&note);
        assert!(detail.starts_with("Work and study\n"));
        assert!(detail.contains(&note.id));
        assert!(!detail.contains("updated"));
        assert!(detail.ends_with("\n\nRead chapter 4"));

        note.updated_at = Some(90_000_000);
        assert!(format_detail(&note).contains("  updated  "));
    }
}
