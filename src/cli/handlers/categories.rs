//! Categories command handler.

use anyhow::Result;

use super::Connection;
use crate::cli::CategoriesArgs;
use crate::cli::output::{CategoryListing, Output, OutputFormat};

/// Prints the options the note form would offer.
///
/// A failed fetch is logged by the loader and shows up as an empty list.
pub async fn handle_categories(args: &CategoriesArgs, conn: &Connection) -> Result<()> {
    let mut editor = conn.editor(args.format);
    editor.initialize().await;
    let options = editor.controller().selector().options();

    match args.format {
        OutputFormat::Human => {
            if options.is_empty() {
                println!("No categories found.");
            } else {
                for option in options {
                    println!("{}", option.label);
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<CategoryListing> = options.iter().map(CategoryListing::from).collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }

    Ok(())
}
