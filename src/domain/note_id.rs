//! Server-assigned note identifier with serde support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque identifier for a note, assigned by the server on creation.
///
/// The server may emit identifiers as JSON integers (`42`) or strings
/// (`"42"`); both decode to the same `NoteId`. The client never inspects
/// the value beyond formatting it into resource paths.
///
/// # Examples
///
/// ```
/// use noteform::domain::NoteId;
///
/// let id: NoteId = "42".parse().unwrap();
/// assert_eq!(id.as_str(), "42");
/// assert_eq!(id.path_segment(), "42");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NoteId(String);

/// Error returned when parsing an empty note identifier.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': id cannot be empty", self.value)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl NoteId {
    /// Returns the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier encoded for use as a single URL path segment.
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl From<u64> for NoteId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseNoteIdError {
                value: s.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(Self::from(n)),
            RawId::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
