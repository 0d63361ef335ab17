//! noteform - terminal client for a notes REST server

pub mod cli;
pub mod domain;
pub mod form;
pub mod infra;
pub mod sync;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        Connection, handle_categories, handle_delete, handle_edit, handle_list, handle_new,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(args.shell, &mut cmd, "notes", &mut std::io::stdout());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let conn = Connection::open(&cli, &config)?;

    // Single-threaded event loop: every request runs on this thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start runtime")?;

    runtime.block_on(async {
        match &cli.command {
            Command::List(args) => handle_list(args, &conn).await,
            Command::Categories(args) => handle_categories(args, &conn).await,
            Command::New(args) => handle_new(args, &conn).await,
            Command::Edit(args) => handle_edit(args, &conn).await,
            Command::Delete(args) => handle_delete(args, &conn).await,
            Command::Completions(_) => Ok(()),
        }
    })
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
