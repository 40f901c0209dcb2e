use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Longest note the editor accepts, in characters
pub const MAX_CONTENT_LENGTH: usize = 200;

/// Default preview width used by list views
pub const DEFAULT_PREVIEW_LENGTH: usize = 20;

/// Topical bucket a note belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoteCategory {
    #[serde(rename = "Work and Study")]
    WorkStudy,
    #[serde(rename = "Life")]
    Life,
    #[serde(rename = "Health and wellness")]
    Health,
}

impl NoteCategory {
    pub const ALL: [NoteCategory; 3] = [Self::WorkStudy, Self::Life, Self::Health];

    /// Value as persisted and exported
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WorkStudy => "Work and Study",
            Self::Life => "Life",
            Self::Health => "Health and wellness",
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::WorkStudy => "Work and study",
            Self::Life => "Home life",
            Self::Health => "Health and wellness",
        }
    }

    /// Parse a raw value, label, or short alias (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        match needle.as_str() {
            "work" | "study" | "work-study" | "work_study" | "work and study" => {
                Some(Self::WorkStudy)
            }
            "life" | "home" | "home life" => Some(Self::Life),
            "health" | "wellness" | "health and wellness" => Some(Self::Health),
            _ => None,
        }
    }
}

impl fmt::Display for NoteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single user-authored note.
///
/// Timestamps are milliseconds since the Unix epoch. `updated_at` is
/// optional because records written before it existed lack the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub category: NoteCategory,
    pub content: String,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Note {
    pub fn new(category: NoteCategory, content: String) -> Self {
        Self::new_at(category, content, now_millis())
    }

    pub fn new_at(category: NoteCategory, content: String, timestamp: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            category,
            content,
            created_at: timestamp,
            updated_at: Some(timestamp),
        }
    }

    /// Timestamp used for recency ordering: `updated_at`, else `created_at`
    pub fn effective_time(&self) -> i64 {
        self.updated_at.unwrap_or(self.created_at)
    }

    /// Whether the note was edited after it was created
    pub fn was_edited(&self) -> bool {
        matches!(self.updated_at, Some(updated) if updated != self.created_at)
    }

    /// Merge a patch and bump `updated_at`, never moving it backwards
    pub fn apply(&mut self, patch: NotePatch, now: i64) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        self.updated_at = Some(now.max(self.effective_time()));
    }
}

/// Fields an update may change. `id` and `created_at` are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub category: Option<NoteCategory>,
    pub content: Option<String>,
}

impl NotePatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            category: None,
            content: Some(content.into()),
        }
    }

    pub fn category(category: NoteCategory) -> Self {
        Self {
            category: Some(category),
            content: None,
        }
    }
}

/// One value per category; every category is always present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryMap<T> {
    pub work_study: T,
    pub life: T,
    pub health: T,
}

impl<T> CategoryMap<T> {
    pub fn get(&self, category: NoteCategory) -> &T {
        match category {
            NoteCategory::WorkStudy => &self.work_study,
            NoteCategory::Life => &self.life,
            NoteCategory::Health => &self.health,
        }
    }

    pub fn get_mut(&mut self, category: NoteCategory) -> &mut T {
        match category {
            NoteCategory::WorkStudy => &mut self.work_study,
            NoteCategory::Life => &mut self.life,
            NoteCategory::Health => &mut self.health,
        }
    }

    /// Iterate in the fixed category order
    pub fn iter(&self) -> impl Iterator<Item = (NoteCategory, &T)> {
        NoteCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl<T> Index<NoteCategory> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: NoteCategory) -> &T {
        self.get(category)
    }
}

impl<T> IndexMut<NoteCategory> for CategoryMap<T> {
    fn index_mut(&mut self, category: NoteCategory) -> &mut T {
        self.get_mut(category)
    }
}

/// Current wall-clock time in milliseconds since the epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Trim editor input and enforce the editor's length rules
pub fn validate_content(raw: &str) -> Result<String> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(Error::InvalidInput("Note content cannot be empty.".to_string()));
    }
    let len = content.chars().count();
    if len > MAX_CONTENT_LENGTH {
        return Err(Error::InvalidInput(format!(
            "Note is {} characters; the limit is {}.",
            len, MAX_CONTENT_LENGTH
        )));
    }
    Ok(content.to_string())
}

/// Shorten content for list rows, appending "..." when cut
pub fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let cut: String = content.chars().take(max_chars).collect();
    format!("{}...", cut)
}
