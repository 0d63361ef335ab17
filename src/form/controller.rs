//! Create/edit mode tracking and form population.

use super::{CategorySelector, Modal};
use crate::domain::{Category, EditingSession, NoteFormValues, NoteId, SubmitLabel};

/// Owns the note form: its fields, the category selector, the modal, and
/// the active editing session.
///
/// Exactly one session is active. Each `open_for_*` call fully reinitializes
/// the form, so nothing from a previous edit survives into the next open.
#[derive(Debug, Default)]
pub struct FormStateController {
    modal: Modal,
    session: EditingSession,
    title: String,
    content: String,
    selector: CategorySelector,
    label: SubmitLabel,
}

impl FormStateController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the form for a new note.
    pub fn open_for_create(&mut self) {
        self.modal.show();
        self.reset_fields();
        self.session = EditingSession::Creating;
        self.label = SubmitLabel::Create;
    }

    /// Opens the form pre-filled with an existing note.
    ///
    /// Exactly the options named in `categories` end up selected; names with
    /// no matching option are ignored.
    pub fn open_for_edit<S: AsRef<str>>(
        &mut self,
        id: NoteId,
        title: &str,
        content: &str,
        categories: &[S],
    ) {
        self.modal.show();
        self.reset_fields();
        self.session = EditingSession::Editing(id);
        self.title = title.to_string();
        self.content = content.to_string();
        self.selector.select_exactly(categories);
        self.label = SubmitLabel::Update;
    }

    /// Hides the form. The session is left as is until the next open.
    pub fn close(&mut self) {
        self.modal.hide();
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_visible()
    }

    pub fn session(&self) -> &EditingSession {
        &self.session
    }

    pub fn submit_label(&self) -> SubmitLabel {
        self.label
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn selector(&self) -> &CategorySelector {
        &self.selector
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Replaces the category selection; unknown names are ignored.
    pub fn set_selected<S: AsRef<str>>(&mut self, categories: &[S]) {
        self.selector.select_exactly(categories);
    }

    /// Returns false if no option has this name.
    pub fn toggle_category(&mut self, name: &str) -> bool {
        self.selector.toggle(name)
    }

    /// Appends one option per category, after any existing options.
    pub fn render_categories(&mut self, categories: &[Category]) {
        for category in categories {
            self.selector.append(category);
        }
    }

    /// Typed snapshot of the current field values.
    pub fn values(&self) -> NoteFormValues {
        NoteFormValues {
            title: self.title.clone(),
            content: self.content.clone(),
            category_names: self.selector.selected_values(),
        }
    }

    fn reset_fields(&mut self) {
        self.title.clear();
        self.content.clear();
        self.selector.clear_selection();
    }
}
