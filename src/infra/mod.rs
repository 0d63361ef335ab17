//! Ambient storage access: cookies and CSRF tokens

mod credentials;

pub use credentials::{
    CSRF_COOKIE, CSRF_HEADER, CookieSource, CredentialReader, SecurityToken,
};
