// src/scan/walk.rs
// =============================================================================
// This module walks a directory tree and collects markdown documents.
//
// How it works:
// 1. Walk every entry below the root (walkdir, depth-first)
// 2. Keep regular files whose path ends in ".md"
// 3. Remove every kept path that contains the exclusion keyword
//
// The result keeps the order in which the filesystem handed out entries.
// It is NOT sorted.
// =============================================================================

use anyhow::{anyhow, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Suffix a file path must end with to count as a document
pub const MARKDOWN_EXTENSION: &str = ".md";

// A markdown file found under the root directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    pub path: PathBuf,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path as shown in console output
    pub fn display(&self) -> std::path::Display<'_> {
        self.path.display()
    }
}

// Discovers every markdown document below `root`
//
// Parameters:
//   root: directory to walk
//   exclude: substring that removes a document when found anywhere in its
//            path; an empty keyword excludes nothing
//
// Returns: documents in traversal order, or an error if root is not a directory
//
// Entries the walk cannot read (permission denied, dangling links) are logged
// and skipped.
pub fn discover_documents(root: &Path, exclude: &str) -> Result<Vec<Document>> {
    if !root.is_dir() {
        return Err(anyhow!("Root is not a directory: {}", root.display()));
    }

    let documents = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && is_markdown(path))
        .filter(|path| {
            let excluded = is_excluded(path, exclude);
            if excluded {
                debug!(path = %path.display(), keyword = exclude, "excluded document");
            }
            !excluded
        })
        .map(Document::new)
        .collect::<Vec<_>>();

    debug!(count = documents.len(), root = %root.display(), "discovered documents");
    Ok(documents)
}

// The suffix test runs on the string form of the path, so "README.md" counts
// but "notes.MD" and "page.markdown" do not
fn is_markdown(path: &Path) -> bool {
    path.to_string_lossy().ends_with(MARKDOWN_EXTENSION)
}

fn is_excluded(path: &Path, keyword: &str) -> bool {
    !keyword.is_empty() && path.to_string_lossy().contains(keyword)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why filter_map for walk errors?
//    - WalkDir yields Result<DirEntry, walkdir::Error>
//    - filter_map lets us log the Err case and drop it in one step
//    - One unreadable folder never stops the whole audit
//
// 2. Why build a new Vec instead of removing items in place?
//    - Removing from a Vec while walking it by index shifts the later items
//      down, so the next item gets skipped unless the index is corrected
//    - A filter chain can't make that mistake
//
// 3. What is to_string_lossy()?
//    - Paths are not guaranteed to be valid UTF-8
//    - to_string_lossy() replaces invalid bytes with U+FFFD so we can still
//      do substring checks on them
// -----------------------------------------------------------------------------
