//! Session authentication for the dashboard.
//!
//! The browser session carries the results backend's access token in an
//! HttpOnly cookie. Handlers receive it as an explicit [`BackendToken`]
//! and hand it to the request layer; nothing reads token state ambiently.

mod extractor;

use secrecy::{ExposeSecret, SecretString};

pub use extractor::SessionAuth;

/// Wrapper type for the backend access token.
/// Uses `SecretString` to prevent accidental logging and zeroize on drop.
///
/// # Security features
/// - `Debug` prints `[REDACTED]` instead of the actual value
/// - Memory is zeroed when dropped (via `zeroize`)
/// - Explicit `.expose()` required to access the value
#[derive(Clone)]
pub struct BackendToken(SecretString);

impl BackendToken {
    /// Wrap a raw token value.
    pub fn new(token: String) -> Self {
        Self(SecretString::from(token))
    }

    /// Expose the raw token for the Authorization header.
    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for BackendToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BackendToken([REDACTED])")
    }
}
