//! Editing session: whether the form is creating a note or editing one.

use std::fmt;

use super::NoteId;

/// The mode of the single active note form.
///
/// `Creating` carries no identifier; `Editing` always carries the id of the
/// note whose edit action opened the form. Values are immutable and passed
/// explicitly to the sync client, so a submit always acts on the session it
/// was handed rather than on whatever button was clicked last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditingSession {
    #[default]
    Creating,
    Editing(NoteId),
}

impl EditingSession {
    /// Returns the targeted note id, if editing.
    pub fn note_id(&self) -> Option<&NoteId> {
        match self {
            Self::Creating => None,
            Self::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

impl fmt::Display for EditingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Creating => write!(f, "creating"),
            Self::Editing(id) => write!(f, "editing {}", id),
        }
    }
}

/// Label shown on the form's submit button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitLabel {
    #[default]
    Create,
    Update,
}

impl SubmitLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "Create Note",
            Self::Update => "Update Note",
        }
    }
}

impl fmt::Display for SubmitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
