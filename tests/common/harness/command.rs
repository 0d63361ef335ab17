//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `notes` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct NotesCommand {
    args: Vec<String>,
}

impl NotesCommand {
    /// Creates a new command for the `notes` binary.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Sets the `--server` option.
    pub fn server(self, url: &str) -> Self {
        self.args(["--server", url])
    }

    /// Sets the `--cookie-file` option.
    pub fn cookie_file(self, path: &Path) -> Self {
        self.args(["--cookie-file".to_string(), path.to_string_lossy().to_string()])
    }

    /// Sets the `--config` option.
    pub fn config(self, path: &Path) -> Self {
        self.args(["--config".to_string(), path.to_string_lossy().to_string()])
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("notes").expect("Failed to find notes binary");
        cmd.env_remove("NOTEFORM_SERVER")
            .env_remove("NOTEFORM_COOKIE_FILE")
            .env_remove("RUST_LOG");
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `categories` command.
    pub fn categories(self) -> Self {
        self.args(["categories"])
    }

    /// Configures for the `new` command with a title.
    pub fn new_note(self, title: &str) -> Self {
        self.args(["new", title])
    }

    /// Configures for the `edit` command with an ID.
    pub fn edit(self, id: &str) -> Self {
        self.args(["edit", id])
    }

    /// Configures for the `rm` command with an ID.
    pub fn rm(self, id: &str) -> Self {
        self.args(["rm", id])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for NotesCommand {
    fn default() -> Self {
        Self::new()
    }
}
