//! Command handlers for the CLI.

mod categories;
mod delete;
mod edit;
mod list;
mod new;

use async_trait::async_trait;

use crate::cli::config::Config;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::Cli;
use crate::domain::Note;
use crate::form::{FormStateController, NoteEditor, ViewRefresher};
use crate::infra::{CookieSource, CredentialReader};
use crate::sync::{HttpTransport, NoteSyncClient, SyncError, Transport, UpdateMethod};

// Re-export public items
pub use categories::handle_categories;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use list::handle_list;
pub use new::handle_new;

// ===========================================
// Shared Utilities
// ===========================================

/// Everything a handler needs to talk to the server.
pub struct Connection {
    transport: HttpTransport,
    credentials: CredentialReader,
    update_method: UpdateMethod,
}

impl Connection {
    /// Builds the HTTP transport from CLI flags and config.
    pub fn open(cli: &Cli, config: &Config) -> anyhow::Result<Self> {
        let source = match config.cookie_file(cli.cookie_file.as_ref()) {
            Some(path) => CookieSource::File(path),
            None => CookieSource::None,
        };
        let credentials = CredentialReader::new(source);
        let server = config.server(cli.server.as_ref());
        log::debug!("using server {}", server);
        let transport = HttpTransport::new(&server, config.timeout(), credentials.clone())?;
        Ok(Self {
            transport,
            credentials,
            update_method: config.update_method,
        })
    }

    pub fn client(&self) -> NoteSyncClient<HttpTransport> {
        NoteSyncClient::new(self.transport.clone(), self.credentials.clone())
            .with_update_method(self.update_method)
    }

    /// An editor whose view reload re-renders the note list in `format`.
    pub fn editor(
        &self,
        format: OutputFormat,
    ) -> NoteEditor<HttpTransport, NoteListView<HttpTransport>> {
        NoteEditor::new(self.client(), NoteListView::new(self.client(), format))
    }
}

/// The rendered note list; reloading it re-fetches and reprints every note.
pub struct NoteListView<T> {
    client: NoteSyncClient<T>,
    format: OutputFormat,
}

impl<T: Transport> NoteListView<T> {
    pub fn new(client: NoteSyncClient<T>, format: OutputFormat) -> Self {
        Self { client, format }
    }

    /// Fetches the notes, most recently updated first.
    pub async fn fetch(&self) -> Result<Vec<Note>, SyncError> {
        let mut notes = self.client.list_notes().await?;
        Note::sort_by_recent(&mut notes);
        Ok(notes)
    }
}

#[async_trait]
impl<T: Transport> ViewRefresher for NoteListView<T> {
    async fn reload(&self) -> Result<(), SyncError> {
        let notes = self.fetch().await?;
        print!("{}", render_notes(&notes, self.format)?);
        Ok(())
    }
}

/// Renders a note list in the requested format.
pub(crate) fn render_notes(
    notes: &[Note],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    match format {
        OutputFormat::Human => {
            if notes.is_empty() {
                out.push_str("No notes found.\n");
                return Ok(out);
            }
            out.push_str(&format!(
                "{:<8}  {:<40}  {:<24}  {:>16}\n",
                "ID", "Title", "Categories", "Updated"
            ));
            out.push_str(&format!(
                "{:<8}  {:<40}  {:<24}  {:>16}\n",
                "-".repeat(8),
                "-".repeat(40),
                "-".repeat(24),
                "-".repeat(16)
            ));
            for note in notes {
                let listing = NoteListing::from(note);
                out.push_str(&format!(
                    "{:<8}  {:<40}  {:<24}  {:>16}\n",
                    truncate_str(&listing.id, 8),
                    truncate_str(&listing.title, 40),
                    truncate_str(&listing.categories.join(", "), 24),
                    listing.updated.unwrap_or_default()
                ));
            }
            out.push_str(&format!("\n{} note(s)\n", notes.len()));
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from).collect();
            out.push_str(&serde_json::to_string_pretty(&Output::new(listings))?);
            out.push('\n');
        }
    }
    Ok(out)
}

/// Applies a category selection, warning about names the server doesn't know.
pub(crate) fn select_categories(controller: &mut FormStateController, names: &[String]) {
    for name in names {
        if !controller.selector().contains(name) {
            log::warn!("unknown category '{}' ignored", name);
        }
    }
    controller.set_selected(names);
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
