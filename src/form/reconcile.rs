//! Reconciling local form state with server-confirmed results.

use async_trait::async_trait;

use super::FormStateController;
use crate::domain::{EditingSession, Note, NoteId};
use crate::sync::SyncError;

/// Re-renders the note list from the server.
#[async_trait]
pub trait ViewRefresher: Send + Sync {
    async fn reload(&self) -> Result<(), SyncError>;
}

/// Applies the outcome of a mutation to the UI.
///
/// Success closes the form and reloads the view exactly once. Failure leaves
/// the form open with its field content intact; the error goes back to the
/// caller, which reports it.
pub struct ResultReconciler<R> {
    refresher: R,
}

impl<R: ViewRefresher> ResultReconciler<R> {
    pub fn new(refresher: R) -> Self {
        Self { refresher }
    }

    pub fn refresher(&self) -> &R {
        &self.refresher
    }

    pub async fn saved(
        &self,
        controller: &mut FormStateController,
        session: &EditingSession,
        note: &Note,
    ) {
        match session {
            EditingSession::Creating => log::info!("note created: {} ({})", note.title, note.id),
            EditingSession::Editing(_) => {
                log::info!("note updated: {} ({})", note.title, note.id)
            }
        }
        controller.close();
        self.reload().await;
    }

    pub async fn deleted(&self, id: &NoteId) {
        log::info!("note deleted: {}", id);
        self.reload().await;
    }

    pub fn failed(&self, action: &str, err: &SyncError) {
        log::debug!("failed to {}: {}", action, err);
    }

    async fn reload(&self) {
        if let Err(e) = self.refresher.reload().await {
            log::error!("failed to reload notes: {}", e);
        }
    }
}
