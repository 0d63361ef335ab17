//! Test harness for CLI and transport integration tests.
//!
//! Provides a loopback notes server that records every request, isolated
//! test environments with their own cookie file, and CLI assertion helpers
//! using `assert_cmd`.

mod command;
mod env;
mod server;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::NotesCommand;
#[allow(unused_imports)]
pub use env::{TEST_TOKEN, TestEnv};
#[allow(unused_imports)]
pub use server::{MockServer, RecordedRequest};
