//! Headless note form: modal, fields, category selector, and the editor flow

mod controller;
mod editor;
mod modal;
mod reconcile;
mod selector;

pub use controller::FormStateController;
pub use editor::NoteEditor;
pub use modal::Modal;
pub use reconcile::{ResultReconciler, ViewRefresher};
pub use selector::{CategoryOption, CategorySelector};
