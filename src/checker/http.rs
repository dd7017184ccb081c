// src/checker/http.rs
// =============================================================================
// This module checks if URLs are alive by making HTTP requests.
//
// Key functionality:
// - One GET per URL, no retries
// - Only an exact 200 counts as success; 204, 3xx that are not followed, 4xx
//   and 5xx are all failures
// - Request errors are sorted into timeout / DNS / connect / TLS / redirect
//   so a report can tell them apart
//
// Redirects follow reqwest's default policy, and there is no timeout unless
// the caller asks for one.
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: The check returns Ok(status) or Err(CheckFailure)
// - Error source chains: Walking .source() to find the root cause
// =============================================================================

use crate::error::CheckFailure;
use anyhow::Result;
use reqwest::{Client, StatusCode};
use std::error::Error as _;
use std::future::Future;
use std::time::Duration;
use tracing::debug;
use url::Url;

// Wraps a reqwest client configured for the audit.
//
// Client is cheap to clone (it's an Arc internally), so the checker is too.
#[derive(Debug, Clone)]
pub struct LinkChecker {
    client: Client,
}

impl LinkChecker {
    // Builds a checker
    //
    // Parameters:
    //   timeout: optional per-request timeout; None keeps the client default
    //            (no timeout)
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?))
    }

    /// Uses an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

/// Judges a single URL: Ok(200) or the reason it failed.
pub trait UrlCheck {
    fn check_url(&self, url: &str)
        -> impl Future<Output = std::result::Result<u16, CheckFailure>>;
}

impl UrlCheck for LinkChecker {
    // Checks a single URL
    //
    // Returns:
    //   Ok(200) when the final response is exactly 200 OK
    //   Err(CheckFailure) otherwise
    async fn check_url(&self, url: &str) -> std::result::Result<u16, CheckFailure> {
        // Catch malformed URLs before reqwest does, so they get their own kind
        let parsed = Url::parse(url).map_err(|e| CheckFailure::InvalidUrl(e.to_string()))?;

        debug!(url = %parsed, "GET");
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(categorize_error)?;

        analyze_status(response.status())
    }
}

// Exact-200 rule
fn analyze_status(status: StatusCode) -> std::result::Result<u16, CheckFailure> {
    if status == StatusCode::OK {
        Ok(status.as_u16())
    } else {
        Err(CheckFailure::Status(status.as_u16()))
    }
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - Too many redirects
// - etc.
fn categorize_error(error: reqwest::Error) -> CheckFailure {
    let causes = cause_chain(&error);

    if error.is_timeout() {
        CheckFailure::Timeout
    } else if error.is_redirect() {
        CheckFailure::TooManyRedirects
    } else if error.is_connect() {
        // Connection errors often mean DNS issues, a failed TLS handshake,
        // or host unreachable
        if causes.contains("dns") {
            CheckFailure::Dns
        } else if is_tls(&causes) {
            CheckFailure::Tls
        } else {
            CheckFailure::Connect
        }
    } else if is_tls(&causes) {
        CheckFailure::Tls
    } else if error.is_builder() {
        CheckFailure::InvalidUrl(error.without_url().to_string())
    } else {
        CheckFailure::Request(error.without_url().to_string())
    }
}

fn is_tls(causes: &str) -> bool {
    causes.contains("certificate") || causes.contains("ssl") || causes.contains("tls")
}

// Joins the sources of the error, lowercased, so the root cause can be
// matched on ("dns error", "invalid certificate", ...). The top-level
// message is left out because it embeds the request URL.
fn cause_chain(error: &reqwest::Error) -> String {
    let mut text = String::new();
    let mut source = error.source();
    while let Some(cause) = source {
        if !text.is_empty() {
            text.push_str(": ");
        }
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text.to_lowercase()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return Result<u16, CheckFailure> instead of a bool?
//    - The caller needs to know *why* a link failed to word its report
//    - A bad status and a network error are printed slightly differently
//
// 2. What is map_err?
//    - Converts the error type of a Result, leaving Ok values alone
//    - Here it turns reqwest::Error into our own CheckFailure
//
// 3. What is .source()?
//    - Errors in Rust can wrap other errors
//    - .source() returns the wrapped error, if any
//    - Walking the chain lets us find "dns error" buried a few levels down
//    - Only the sources are searched: the top-level message contains the
//      URL, and a URL like /openssl-guide must not look like a TLS error
//
// 4. Why `use std::error::Error as _`?
//    - We need the trait in scope to call .source()
//    - `as _` imports it without taking up the name `Error`
// -----------------------------------------------------------------------------
