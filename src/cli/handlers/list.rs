//! List command handler.

use anyhow::{Context, Result};

use super::{Connection, NoteListView, render_notes};
use crate::cli::ListArgs;

pub async fn handle_list(args: &ListArgs, conn: &Connection) -> Result<()> {
    let view = NoteListView::new(conn.client(), args.format);
    let notes = view.fetch().await.context("failed to list notes")?;
    print!("{}", render_notes(&notes, args.format)?);
    Ok(())
}
