// src/error.rs
// =============================================================================
// Why a single link check can fail.
//
// A failed link is not an error of the run: it is a value that gets counted
// and reported. Run-level problems (bad root directory, broken client setup)
// go through anyhow in main.rs instead.
// =============================================================================

use serde::Serialize;
use thiserror::Error;

/// The reason a resolved URL did not pass the check.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum CheckFailure {
    /// The server answered, but not with exactly 200
    #[error("HTTP {0}")]
    Status(u16),

    /// Request timed out
    #[error("request timed out")]
    Timeout,

    /// Could not resolve hostname
    #[error("could not resolve hostname")]
    Dns,

    /// Connection refused or otherwise failed
    #[error("connection failed")]
    Connect,

    /// SSL/TLS certificate or handshake error
    #[error("TLS error")]
    Tls,

    /// Redirect loop or redirect limit exceeded
    #[error("too many redirects")]
    TooManyRedirects,

    /// The URL could not be parsed, nothing was sent
    #[error("malformed URL: {0}")]
    InvalidUrl(String),

    /// Any other request error
    #[error("request failed: {0}")]
    Request(String),
}

impl CheckFailure {
    /// True when the server produced a response at all.
    ///
    /// The console report words the two cases slightly differently.
    pub fn is_bad_status(&self) -> bool {
        matches!(self, CheckFailure::Status(_))
    }
}
