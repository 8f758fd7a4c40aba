//! Entry type definitions for memarc-core

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Type given to entries created without an explicit one
pub const DEFAULT_ENTRY_TYPE: &str = "personal";

/// A memory stored in the archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Store-assigned identifier, never reused
    pub id: i64,
    /// Free text of the memory
    pub content: String,
    /// Category such as personal, professional or study
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Comma-separated tags, stored verbatim
    pub tags: String,
    /// When the entry was created
    pub created_at: DateTime<Utc>,
    /// When the entry was last changed
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Individual tags, trimmed, with empty items dropped
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Whether the entry was changed after it was created
    pub fn is_edited(&self) -> bool {
        self.updated_at > self.created_at
    }
}

/// Input for creating an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub content: String,
    pub entry_type: String,
    pub tags: String,
    /// Creation time; the store uses the current time when unset
    pub created_at: Option<DateTime<Utc>>,
}

impl NewEntry {
    /// Create a new entry with the default type and no tags
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            entry_type: DEFAULT_ENTRY_TYPE.to_string(),
            tags: String::new(),
            created_at: None,
        }
    }

    /// Set the entry type
    pub fn with_type(mut self, entry_type: impl Into<String>) -> Self {
        self.entry_type = entry_type.into();
        self
    }

    /// Set the comma-separated tags
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// Set the creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Changes to apply to an existing entry; unset fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    pub content: Option<String>,
    pub entry_type: Option<String>,
    pub tags: Option<String>,
}

impl EntryUpdate {
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn entry_type(mut self, entry_type: impl Into<String>) -> Self {
        self.entry_type = Some(entry_type.into());
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.entry_type.is_none() && self.tags.is_none()
    }
}
