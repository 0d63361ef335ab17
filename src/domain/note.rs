//! Note as returned by the server, and the form payload used to write one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::NoteId;

/// A note as confirmed by the server.
///
/// The client never owns a note's canonical state; values of this type are
/// decoded from responses and only used for display or to seed the edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Category names attached to the note.
    #[serde(default, alias = "category_names")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Sorts notes most-recently-updated first; notes without a timestamp go last.
    pub fn sort_by_recent(notes: &mut [Note]) {
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    }
}

/// Typed snapshot of the note form, sent as the body of create/update requests.
///
/// `category_names` keeps the selector's order and is not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFormValues {
    pub title: String,
    pub content: String,
    pub category_names: Vec<String>,
}
