//! Isolated test environment with a temp directory and a mock server.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use super::{MockServer, NotesCommand};
use std::path::PathBuf;
use tempfile::TempDir;

/// Token written to the default cookie file.
pub const TEST_TOKEN: &str = "test-csrf-token";

/// Isolated test environment.
///
/// Holds a running mock server and a temp directory with a cookie file and
/// a (missing) config path, so the user's real config never leaks in.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
    server: MockServer,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        let env = Self {
            _temp_dir: temp_dir,
            root,
            server: MockServer::start(),
        };
        env.write_cookies(&format!("sessionid=abc; csrftoken={}", TEST_TOKEN));
        env
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    pub fn cookie_path(&self) -> PathBuf {
        self.root.join("cookies.txt")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Replaces the contents of the cookie file.
    pub fn write_cookies(&self, cookies: &str) {
        std::fs::write(self.cookie_path(), cookies).expect("Failed to write cookie file");
    }

    /// Writes a config file that the command will load.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.config_path(), contents).expect("Failed to write config file");
    }

    /// Creates a NotesCommand pointed at this environment's server and cookies.
    pub fn cmd(&self) -> NotesCommand {
        NotesCommand::new()
            .server(&self.server.url())
            .cookie_file(&self.cookie_path())
            .config(&self.config_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
