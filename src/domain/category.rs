//! Server-owned category reference data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A category a note can be tagged with.
///
/// Categories are fetched once per editor lifetime and are read-only on the
/// client. Extra server fields (such as the numeric primary key) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
