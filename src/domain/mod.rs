//! Core types: Note, NoteId, Category, EditingSession, form values

mod category;
mod note;
mod note_id;
mod session;

pub use category::Category;
pub use note::{Note, NoteFormValues};
pub use note_id::{NoteId, ParseNoteIdError};
pub use session::{EditingSession, SubmitLabel};
