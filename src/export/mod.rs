//! Plain-text export of the whole note collection.

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::Result;
use crate::models::Note;
use crate::store::{BlobStore, NoteStore};

mod share;

pub use share::{CommandShare, NoShareTarget, ShareRequest, ShareTarget};

/// Whole document when there is nothing to export
pub const EMPTY_EXPORT: &str = "No notes available.";

/// Fixed file name reused by every share
pub const SHARE_FILE_NAME: &str = "notes-export-share.txt";

pub const SHARE_MIME_TYPE: &str = "text/plain";
pub const SHARE_DIALOG_TITLE: &str = "Export notes";

const SEPARATOR: &str = "------------------------------";

/// A frozen export written to the export directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// What happened to a share request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The document was handed to the share target
    Shared { path: PathBuf },
    /// No share target is available; the document was written but not delivered
    Unavailable { path: PathBuf },
}

/// ISO-8601 UTC with milliseconds, e.g. `2026-10-17T09:30:00.123Z`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `notes-export-<timestamp>.txt` with `:` and `.` made filesystem-safe
pub fn export_file_name(generated_at: DateTime<Utc>) -> String {
    let stamp = iso_timestamp(generated_at).replace([':', '.'], "-");
    format!("notes-export-{}.txt", stamp)
}

fn format_datetime<Tz: TimeZone>(millis: i64, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    match tz.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => millis.to_string(),
    }
}

/// Render notes, in the given order, as one text document
pub fn render_document<Tz: TimeZone>(notes: &[Note], generated_at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    if notes.is_empty() {
        return EMPTY_EXPORT.to_string();
    }

    let mut lines: Vec<String> = vec![
        "Notes Export".to_string(),
        format!("Generated at: {}", iso_timestamp(generated_at)),
        String::new(),
    ];

    for (index, note) in notes.iter().enumerate() {
        lines.push(format!("Note {}", index + 1));
        lines.push(format!("Category: {}", note.category.as_str()));
        lines.push(format!("Created: {}", format_datetime(note.created_at, tz)));
        if let Some(updated) = note.updated_at.filter(|_| note.was_edited()) {
            lines.push(format!("Last updated: {}", format_datetime(updated, tz)));
        }
        lines.push("Content:".to_string());
        lines.push(note.content.clone());
        lines.push(String::new());
        lines.push(SEPARATOR.to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Writes exports of a store's notes into the configured directories
pub struct Exporter<'a, B> {
    store: &'a NoteStore<B>,
    export_dir: PathBuf,
    share_dir: PathBuf,
}

impl<'a, B: BlobStore> Exporter<'a, B> {
    pub fn new(store: &'a NoteStore<B>, export_dir: impl Into<PathBuf>, share_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            export_dir: export_dir.into(),
            share_dir: share_dir.into(),
        }
    }

    /// Current document, newest notes first, with local datetimes
    pub fn build_document(&self, generated_at: DateTime<Utc>) -> String {
        render_document(&self.store.list_all_sorted(), generated_at, &Local)
    }

    /// Write a timestamped export file that later deletes do not touch
    pub fn export_as_file(&self) -> Result<ExportedFile> {
        self.export_as_file_at(Utc::now())
    }

    pub fn export_as_file_at(&self, generated_at: DateTime<Utc>) -> Result<ExportedFile> {
        let document = self.build_document(generated_at);
        let file_name = export_file_name(generated_at);
        let path = write_document(&self.export_dir, &file_name, &document)?;
        info!(path = %path.display(), "exported notes");
        Ok(ExportedFile { path, file_name })
    }

    /// Write the share file and hand it to `target` when one is available
    pub fn share(&self, target: &dyn ShareTarget) -> Result<ShareOutcome> {
        let document = self.build_document(Utc::now());
        let path = write_document(&self.share_dir, SHARE_FILE_NAME, &document)?;

        if !target.is_available() {
            warn!(path = %path.display(), "no share target available");
            return Ok(ShareOutcome::Unavailable { path });
        }

        let request = ShareRequest {
            path: path.clone(),
            mime_type: SHARE_MIME_TYPE,
            dialog_title: SHARE_DIALOG_TITLE,
        };
        target.share(&request)?;
        info!(path = %path.display(), "shared notes export");
        Ok(ShareOutcome::Shared { path })
    }
}

fn write_document(dir: &Path, file_name: &str, document: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, document)?;
    Ok(path)
}
