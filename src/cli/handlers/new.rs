//! New note command handler.

use anyhow::{Context, Result};

use super::{Connection, select_categories};
use crate::cli::NewArgs;
use crate::cli::output::OutputFormat;

pub async fn handle_new(args: &NewArgs, conn: &Connection) -> Result<()> {
    let mut editor = conn.editor(OutputFormat::Human);
    editor.initialize().await;

    editor.create_clicked();
    let form = editor.controller_mut();
    form.set_title(args.title.as_str());
    form.set_content(args.content.as_str());
    select_categories(form, &args.categories);

    let note = editor.submit().await.context("note was not created")?;
    println!("Created: {} [{}]", note.title, note.id);
    Ok(())
}
