//! Note synchronization: turns form submissions and deletes into REST calls.

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{ApiRequest, SyncError, Transport};
use crate::domain::{EditingSession, Note, NoteFormValues, NoteId};
use crate::infra::{CSRF_HEADER, CredentialReader};

/// Collection endpoint for notes.
pub const NOTES_PATH: &str = "/api/notes/";

/// Returns the single-resource path for a note.
pub fn note_path(id: &NoteId) -> String {
    format!("{}{}/", NOTES_PATH, id.path_segment())
}

/// HTTP verb used when saving an existing note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMethod {
    /// Partial update (default)
    #[default]
    Patch,
    /// Full replacement
    Put,
}

impl UpdateMethod {
    pub fn method(self) -> Method {
        match self {
            Self::Patch => Method::PATCH,
            Self::Put => Method::PUT,
        }
    }
}

/// Client for the notes endpoints.
///
/// Mutating requests carry the CSRF token read fresh from the credential
/// reader; reads never do. At most one submit per client is outstanding at
/// a time.
pub struct NoteSyncClient<T> {
    transport: T,
    credentials: CredentialReader,
    update_method: UpdateMethod,
    in_flight: AtomicBool,
}

impl<T: Transport> NoteSyncClient<T> {
    pub fn new(transport: T, credentials: CredentialReader) -> Self {
        Self {
            transport,
            credentials,
            update_method: UpdateMethod::default(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_update_method(mut self, update_method: UpdateMethod) -> Self {
        self.update_method = update_method;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Saves the form values: POST when creating, PATCH/PUT when editing.
    ///
    /// # Errors
    ///
    /// - `SubmitInFlight` if another submit on this client is still running
    /// - `Network` if no response was received
    /// - `Http` with the response text for any non-2xx status
    /// - `Decode` if a 2xx body is not a note
    pub async fn submit(
        &self,
        session: &EditingSession,
        values: &NoteFormValues,
    ) -> Result<Note, SyncError> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        let (method, path) = match session {
            EditingSession::Creating => (Method::POST, NOTES_PATH.to_string()),
            EditingSession::Editing(id) => (self.update_method.method(), note_path(id)),
        };

        let request = ApiRequest::new(method, path)
            .header(CONTENT_TYPE.as_str(), "application/json")
            .header(CSRF_HEADER, self.credentials.csrf_header_value())
            .json(serde_json::to_value(values)?);

        let body = self.transport.send(request).await?.into_success()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Deletes a note. Sends only the CSRF header, no body.
    pub async fn delete_note(&self, id: &NoteId) -> Result<(), SyncError> {
        let request = ApiRequest::new(Method::DELETE, note_path(id))
            .header(CSRF_HEADER, self.credentials.csrf_header_value());
        self.transport.send(request).await?.into_success()?;
        Ok(())
    }

    /// Fetches every note visible to the current user.
    pub async fn list_notes(&self) -> Result<Vec<Note>, SyncError> {
        let request = ApiRequest::new(Method::GET, NOTES_PATH);
        let body = self.transport.send(request).await?.into_success()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches a single note.
    pub async fn fetch_note(&self, id: &NoteId) -> Result<Note, SyncError> {
        let request = ApiRequest::new(Method::GET, note_path(id));
        let body = self.transport.send(request).await?.into_success()?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Marks a submit as outstanding until dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, SyncError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SyncError::SubmitInFlight)?;
        Ok(Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
