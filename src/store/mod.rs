//! Durable note collection on top of a single-key blob store.
//!
//! The whole collection is one JSON array under [`NOTES_KEY`]. Every
//! mutation reads the array, changes it, and writes it back in full.
//! Overlapping mutations are last-write-wins; callers serialize their own
//! writes.
//!
//! Array entries that do not decode as a [`Note`] (say, a category this
//! build does not know) are hidden from reads but written back untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{now_millis, Note, NoteCategory, NotePatch};

mod memory;
pub mod query;

pub use memory::MemoryBlobStore;

/// Key holding the serialized note collection
pub const NOTES_KEY: &str = "@notes_app_data";

/// Failure reported by a blob store backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("blob store unavailable: {0}")]
    Unavailable(String),
}

/// Key-value persistence holding opaque text blobs
pub trait BlobStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, BackendError>;
    fn set(&self, key: &str, value: &str) -> std::result::Result<(), BackendError>;
    fn remove(&self, key: &str) -> std::result::Result<(), BackendError>;
}

impl<B: BlobStore + ?Sized> BlobStore for &B {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, BackendError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), BackendError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> std::result::Result<(), BackendError> {
        (**self).remove(key)
    }
}

/// One entry of the stored array
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum Record {
    Note(Note),
    Unknown(Value),
}

impl Record {
    fn decode(value: Value) -> Self {
        match Note::deserialize(&value) {
            Ok(note) => Self::Note(note),
            Err(e) => {
                warn!(error = %e, "skipping unreadable note record");
                Self::Unknown(value)
            }
        }
    }

    fn as_note_mut(&mut self) -> Option<&mut Note> {
        match self {
            Self::Note(note) => Some(note),
            Self::Unknown(_) => None,
        }
    }

    fn into_note(self) -> Option<Note> {
        match self {
            Self::Note(note) => Some(note),
            Self::Unknown(_) => None,
        }
    }
}

/// Owns the canonical note collection
pub struct NoteStore<B> {
    blobs: B,
}

impl<B: BlobStore> NoteStore<B> {
    pub fn new(blobs: B) -> Self {
        Self { blobs }
    }

    /// All notes in insertion order; errors if the blob is unreadable
    pub fn try_list_all(&self) -> Result<Vec<Note>> {
        Ok(self
            .try_load()?
            .into_iter()
            .filter_map(Record::into_note)
            .collect())
    }

    /// All notes in insertion order, or empty when nothing readable is stored
    pub fn list_all(&self) -> Vec<Note> {
        self.try_list_all().unwrap_or_else(|e| {
            warn!(error = %e, "failed to load notes, treating as empty");
            Vec::new()
        })
    }

    /// Look up one note by exact id
    pub fn get(&self, id: &str) -> Option<Note> {
        self.list_all().into_iter().find(|n| n.id == id)
    }

    /// Create and persist a new note
    pub fn save(&self, category: NoteCategory, content: impl Into<String>) -> Result<Note> {
        let mut records = self.load();
        let note = Note::new(category, content.into());
        records.push(Record::Note(note.clone()));
        self.write(&records)?;
        debug!(id = %note.id, category = note.category.as_str(), "saved note");
        Ok(note)
    }

    /// Merge `patch` into the note with `id`.
    ///
    /// Returns `Ok(None)` when no such note exists; nothing is written then.
    pub fn update(&self, id: &str, patch: NotePatch) -> Result<Option<Note>> {
        let mut records = self.load();
        let Some(note) = records
            .iter_mut()
            .filter_map(Record::as_note_mut)
            .find(|n| n.id == id)
        else {
            debug!(id, "update target not found");
            return Ok(None);
        };
        note.apply(patch, now_millis());
        let updated = note.clone();
        self.write(&records)?;
        debug!(id, "updated note");
        Ok(Some(updated))
    }

    /// Remove the note with `id`. Returns whether a note was removed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut records = self.load();
        let before = records.len();
        records.retain(|r| !matches!(r, Record::Note(n) if n.id == id));
        self.write(&records)?;
        let removed = records.len() != before;
        debug!(id, removed, "deleted note");
        Ok(removed)
    }

    /// Drop the whole collection
    pub fn delete_all(&self) -> Result<()> {
        self.blobs.remove(NOTES_KEY).map_err(Error::Persistence)?;
        debug!("deleted all notes");
        Ok(())
    }

    fn try_load(&self) -> Result<Vec<Record>> {
        let Some(data) = self.blobs.get(NOTES_KEY).map_err(Error::Read)? else {
            return Ok(Vec::new());
        };
        let values: Vec<Value> = serde_json::from_str(&data).map_err(Error::Corrupted)?;
        Ok(values.into_iter().map(Record::decode).collect())
    }

    /// Stored records for a mutation; an unreadable blob starts a fresh collection
    fn load(&self) -> Vec<Record> {
        self.try_load().unwrap_or_else(|e| {
            warn!(error = %e, "failed to load notes, starting from empty");
            Vec::new()
        })
    }

    fn write(&self, records: &[Record]) -> Result<()> {
        let data = serde_json::to_string(records).map_err(Error::Encode)?;
        self.blobs.set(NOTES_KEY, &data).map_err(Error::Persistence)
    }
}
