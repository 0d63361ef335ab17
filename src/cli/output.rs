//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Note;
use crate::form::CategoryOption;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: String,
    pub title: String,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl From<&Note> for NoteListing {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.to_string(),
            title: note.title.clone(),
            categories: note.categories.clone(),
            updated: note
                .updated_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string()),
        }
    }
}

/// A category option in listing output.
#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub name: String,
}

impl From<&CategoryOption> for CategoryListing {
    fn from(option: &CategoryOption) -> Self {
        Self {
            name: option.value.clone(),
        }
    }
}
