//! User-action entry points wiring the form, the sync client and the reconciler.

use super::{FormStateController, ResultReconciler, ViewRefresher};
use crate::domain::{Note, NoteId};
use crate::sync::{CategoryLoader, NoteSyncClient, SyncError, Transport};

/// The note editor behind the create, edit, delete, and submit actions.
pub struct NoteEditor<T, R> {
    controller: FormStateController,
    client: NoteSyncClient<T>,
    reconciler: ResultReconciler<R>,
    categories_loaded: bool,
}

impl<T: Transport, R: ViewRefresher> NoteEditor<T, R> {
    pub fn new(client: NoteSyncClient<T>, refresher: R) -> Self {
        Self {
            controller: FormStateController::new(),
            client,
            reconciler: ResultReconciler::new(refresher),
            categories_loaded: false,
        }
    }

    /// Loads the category options. Only the first call fetches.
    pub async fn initialize(&mut self) {
        if self.categories_loaded {
            return;
        }
        CategoryLoader::load(self.client.transport(), &mut self.controller).await;
        self.categories_loaded = true;
    }

    pub fn controller(&self) -> &FormStateController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FormStateController {
        &mut self.controller
    }

    pub fn client(&self) -> &NoteSyncClient<T> {
        &self.client
    }

    pub fn refresher(&self) -> &R {
        self.reconciler.refresher()
    }

    pub fn create_clicked(&mut self) {
        self.controller.open_for_create();
    }

    pub fn edit_clicked<S: AsRef<str>>(
        &mut self,
        id: NoteId,
        title: &str,
        content: &str,
        categories: &[S],
    ) {
        self.controller.open_for_edit(id, title, content, categories);
    }

    pub fn cancel_clicked(&mut self) {
        self.controller.close();
    }

    /// Saves the open form for the session it was opened with.
    ///
    /// On success the form closes and the view reloads. On failure the error
    /// is logged and the form stays open with its contents.
    pub async fn submit(&mut self) -> Result<Note, SyncError> {
        if !self.controller.is_open() {
            let err = SyncError::FormClosed;
            self.reconciler.failed("save note", &err);
            return Err(err);
        }

        let session = self.controller.session().clone();
        let values = self.controller.values();

        match self.client.submit(&session, &values).await {
            Ok(note) => {
                self.reconciler
                    .saved(&mut self.controller, &session, &note)
                    .await;
                Ok(note)
            }
            Err(e) => {
                self.reconciler.failed("save note", &e);
                Err(e)
            }
        }
    }

    /// Deletes a note and reloads the view on success.
    pub async fn delete(&mut self, id: &NoteId) -> Result<(), SyncError> {
        match self.client.delete_note(id).await {
            Ok(()) => {
                self.reconciler.deleted(id).await;
                Ok(())
            }
            Err(e) => {
                self.reconciler.failed("delete note", &e);
                Err(e)
            }
        }
    }
}
