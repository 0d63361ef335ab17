//! Errors raised while talking to the notes API.

use thiserror::Error;

/// Failure of a single API interaction.
///
/// None of these are retried; the caller logs them and leaves local state as
/// it was.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The request never produced a response (connection refused, timeout).
    #[error("network failure: {0}")]
    Network(String),

    /// The server answered with a non-2xx status; `body` holds its diagnostic text.
    #[error("server returned {status}: {body}")]
    Http { status: u16, body: String },

    /// A 2xx response whose body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Another submit on the same client has not completed yet.
    #[error("a submit is already in flight")]
    SubmitInFlight,

    /// Submit was attempted while the note form was closed.
    #[error("the note form is not open")]
    FormClosed,

    #[error("failed to build HTTP client: {0}")]
    ClientSetup(String),
}

impl SyncError {
    /// Returns the HTTP status for server-side failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
