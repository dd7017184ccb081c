// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - markdown: Extracts link targets from markdown text
// - resolve: Turns a target into the URL that gets requested
// - http: Makes the HTTP request and judges the response
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod http;
mod markdown;
mod resolve;

// Re-export public items from submodules
// This lets users write `checker::LinkChecker` instead of
// `checker::http::LinkChecker`
pub use http::{LinkChecker, UrlCheck};
pub use markdown::{extract_markdown_links, LinkTarget};
pub use resolve::{
    ResolvedUrl, Resolver, DEFAULT_BASE_URL, DEFAULT_SECOND_LINK_OVERRIDE,
};
