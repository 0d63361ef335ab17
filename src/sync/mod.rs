//! REST synchronization with the notes server

mod categories;
mod error;
mod notes;
mod transport;

#[cfg(test)]
pub(crate) mod fake;

pub use categories::{CATEGORIES_PATH, CategoryLoader};
pub use error::SyncError;
pub use notes::{NOTES_PATH, NoteSyncClient, UpdateMethod, note_path};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
