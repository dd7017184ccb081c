// src/checker/resolve.rs
// =============================================================================
// This module turns a link target into the URL that actually gets requested.
//
// Rules, in order:
// 1. "https://..." targets are requested as written
// 2. "#anchor" targets are replaced by the repository base URL
//    (the anchor itself is never looked up)
// 3. If the second-link override is on, the target at index 1 of a document
//    is replaced by the override URL, whatever it was
// =============================================================================

use super::markdown::LinkTarget;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::fmt;

/// Where anchor links point when they are checked
pub const DEFAULT_BASE_URL: &str = "https://github.com/SciBorgs/SciGuides/blob/main/";

/// What the second link of every document is replaced with by default
pub const DEFAULT_SECOND_LINK_OVERRIDE: &str = "https://docs.google.com";

const HTTPS: &str = "https://";

/// A URL ready for the HTTP check. Always starts with `https://`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedUrl(String);

impl ResolvedUrl {
    /// Accepts only strings that start with `https://`
    pub fn parse(url: &str) -> Result<Self> {
        if url.starts_with(HTTPS) {
            Ok(Self(url.to_string()))
        } else {
            Err(anyhow!("URL must start with {}: {}", HTTPS, url))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Resolution settings, built once per run
#[derive(Debug, Clone)]
pub struct Resolver {
    base_url: ResolvedUrl,
    second_link_override: Option<ResolvedUrl>,
}

impl Resolver {
    pub fn new(base_url: ResolvedUrl, second_link_override: Option<ResolvedUrl>) -> Self {
        Self {
            base_url,
            second_link_override,
        }
    }

    pub fn second_link_override(&self) -> Option<&ResolvedUrl> {
        self.second_link_override.as_ref()
    }

    // Resolves one target
    //
    // Parameters:
    //   target: the extracted link target
    //   index: zero-based position of the target within its document
    pub fn resolve(&self, target: &LinkTarget, index: usize) -> ResolvedUrl {
        if index == 1 {
            if let Some(pinned) = &self.second_link_override {
                return pinned.clone();
            }
        }

        if target.as_str().starts_with(HTTPS) {
            ResolvedUrl(target.as_str().to_string())
        } else {
            self.base_url.clone()
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            base_url: ResolvedUrl(DEFAULT_BASE_URL.to_string()),
            second_link_override: Some(ResolvedUrl(DEFAULT_SECOND_LINK_OVERRIDE.to_string())),
        }
    }
}
