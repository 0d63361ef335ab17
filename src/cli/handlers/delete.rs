//! Delete command handler.

use anyhow::{Context, Result};

use super::Connection;
use crate::cli::DeleteArgs;
use crate::cli::output::OutputFormat;
use crate::domain::NoteId;

pub async fn handle_delete(args: &DeleteArgs, conn: &Connection) -> Result<()> {
    let id: NoteId = args.id.parse()?;

    let mut editor = conn.editor(OutputFormat::Human);
    editor
        .delete(&id)
        .await
        .with_context(|| format!("note {} was not deleted", id))?;
    println!("Deleted: {}", id);
    Ok(())
}
