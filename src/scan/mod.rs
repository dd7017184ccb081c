// src/scan/mod.rs
// =============================================================================
// This module finds the markdown documents to audit.
//
// Features:
// - Recursive walk of the root directory
// - Keeps regular files ending in ".md"
// - Drops every document whose path contains the exclusion keyword
//   (by default "archive")
//
// Rust concepts:
// - Iterators: filter/map chains instead of index-juggling loops
// - PathBuf: Owned filesystem paths
// =============================================================================

mod walk;

// Re-export the discovery API
pub use walk::{discover_documents, Document};
