//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// notes - create, edit, list, and delete notes on a notes server
#[derive(Parser, Debug)]
#[command(name = "notes", version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the notes server (overrides env and config file)
    #[arg(short = 's', long, global = true)]
    pub server: Option<String>,

    /// File containing the Cookie header for the session (re-read per request)
    #[arg(long, global = true)]
    pub cookie_file: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List notes, most recently updated first
    #[command(name = "ls")]
    List(ListArgs),

    /// List available categories
    Categories(CategoriesArgs),

    /// Create a new note
    New(NewArgs),

    /// Edit an existing note
    Edit(EditArgs),

    /// Delete a note
    #[command(name = "rm")]
    Delete(DeleteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `categories` command
#[derive(Parser, Debug)]
pub struct CategoriesArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title
    pub title: String,

    /// Note content
    #[arg(short = 'C', long, default_value = "")]
    pub content: String,

    /// Category for the note (can be specified multiple times)
    #[arg(short = 'c', long = "category", action = ArgAction::Append)]
    pub categories: Vec<String>,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID
    pub id: String,

    /// New title
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// New content
    #[arg(short = 'C', long)]
    pub content: Option<String>,

    /// Replace the note's categories (can be specified multiple times)
    #[arg(short = 'c', long = "category", action = ArgAction::Append)]
    pub categories: Vec<String>,

    /// Remove all categories from the note
    #[arg(long, conflicts_with = "categories")]
    pub clear_categories: bool,
}

/// Arguments for the `rm` (delete) command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note ID
    pub id: String,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn new_collects_repeated_categories() {
        let cli = Cli::parse_from(["notes", "new", "Plan", "-c", "work", "-c", "urgent"]);
        match cli.command {
            Command::New(args) => {
                assert_eq!(args.title, "Plan");
                assert_eq!(args.content, "");
                assert_eq!(args.categories, vec!["work", "urgent"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn edit_rejects_categories_with_clear() {
        let result = Cli::try_parse_from(["notes", "edit", "4", "-c", "a", "--clear-categories"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_server_flag_after_subcommand() {
        let cli = Cli::parse_from(["notes", "rm", "7", "--server", "http://x"]);
        assert_eq!(cli.server.as_deref(), Some("http://x"));
    }
}
