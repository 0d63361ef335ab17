//! Cookie storage and CSRF token extraction.

use std::fmt;
use std::path::PathBuf;

/// Name of the cookie holding the CSRF token.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Header carrying the CSRF token on mutating requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Where the user's `Cookie` header string is kept.
///
/// A file source is re-read on every call, so a token rotated by another
/// process (or a fresh login) is picked up by the next request.
#[derive(Debug, Clone, Default)]
pub enum CookieSource {
    #[default]
    None,
    /// File containing a cookie header string (`a=1; csrftoken=xyz`).
    File(PathBuf),
    Static(String),
}

impl CookieSource {
    /// Reads the current cookie header string, if any.
    ///
    /// An unreadable file is logged and treated as no cookies.
    pub fn read(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Static(s) => Some(s.clone()),
            Self::File(path) => match std::fs::read_to_string(path) {
                Ok(contents) => {
                    let trimmed = contents.trim();
                    (!trimmed.is_empty()).then(|| trimmed.to_string())
                }
                Err(e) => {
                    log::warn!("cannot read cookie file {}: {}", path.display(), e);
                    None
                }
            },
        }
    }
}

/// CSRF token value taken from the `csrftoken` cookie.
#[derive(Clone, PartialEq, Eq)]
pub struct SecurityToken(String);

impl SecurityToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecurityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecurityToken(***)")
    }
}

/// Extracts the CSRF token from ambient cookie storage.
///
/// Nothing is cached: every call goes back to the cookie source.
#[derive(Debug, Clone, Default)]
pub struct CredentialReader {
    source: CookieSource,
}

impl CredentialReader {
    pub fn new(source: CookieSource) -> Self {
        Self { source }
    }

    /// Returns the raw cookie header string to send with every request.
    pub fn cookie_header(&self) -> Option<String> {
        self.source.read()
    }

    /// Returns the current CSRF token, if the cookie is present.
    pub fn token(&self) -> Option<SecurityToken> {
        self.cookie_header()
            .and_then(|header| find_cookie(&header, CSRF_COOKIE))
            .map(SecurityToken)
    }

    /// Value for the CSRF header; `null` when no token is available.
    pub fn csrf_header_value(&self) -> String {
        self.token()
            .map(|t| t.0)
            .unwrap_or_else(|| "null".to_string())
    }
}

/// Finds a cookie by exact name in a `Cookie` header string and percent-decodes it.
fn find_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name {
            return None;
        }
        let decoded = urlencoding::decode(value)
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| value.to_string());
        Some(decoded)
    })
}
