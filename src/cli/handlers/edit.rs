//! Edit command handler.

use anyhow::{Context, Result, bail};

use super::{Connection, select_categories};
use crate::cli::EditArgs;
use crate::cli::output::OutputFormat;
use crate::domain::NoteId;

/// Fetches the note, opens it in the form, applies the overrides, and saves.
///
/// Fields not given on the command line keep the note's current values.
pub async fn handle_edit(args: &EditArgs, conn: &Connection) -> Result<()> {
    let id: NoteId = args.id.parse()?;

    let mut editor = conn.editor(OutputFormat::Human);
    editor.initialize().await;

    let note = editor
        .client()
        .fetch_note(&id)
        .await
        .with_context(|| format!("failed to fetch note {}", id))?;
    editor.edit_clicked(note.id.clone(), &note.title, &note.content, &note.categories);

    // The form drops names it has no option for; saving would erase them.
    let explicit_categories = args.clear_categories || !args.categories.is_empty();
    if !explicit_categories {
        let selector = editor.controller().selector();
        let missing: Vec<&str> = note
            .categories
            .iter()
            .map(String::as_str)
            .filter(|name| !selector.contains(name))
            .collect();
        if !missing.is_empty() {
            bail!(
                "note {} has categories that could not be loaded ({}); \
                 pass -c or --clear-categories to set them explicitly",
                id,
                missing.join(", ")
            );
        }
    }

    let form = editor.controller_mut();
    if let Some(title) = &args.title {
        form.set_title(title.as_str());
    }
    if let Some(content) = &args.content {
        form.set_content(content.as_str());
    }
    if args.clear_categories {
        form.set_selected::<&str>(&[]);
    } else if !args.categories.is_empty() {
        select_categories(form, &args.categories);
    }

    let saved = editor.submit().await.context("note was not updated")?;
    println!("Updated: {} [{}]", saved.title, saved.id);
    Ok(())
}
