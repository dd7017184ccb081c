// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every flag has a default that matches running the tool with no arguments
// from the root of the knowledge base, so `doc-link-audit` alone does the
// full audit.
//
// Rust concepts:
// - Derive macros: clap generates the parser from the struct
// - Option<T>: For flags that may be absent
// =============================================================================

use crate::audit::AuditConfig;
use crate::checker::{ResolvedUrl, Resolver, DEFAULT_BASE_URL, DEFAULT_SECOND_LINK_OVERRIDE};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "doc-link-audit",
    version,
    about = "Scan a markdown knowledge base for dead links",
    long_about = "doc-link-audit walks a directory, extracts [label](https://...) and [label](#...) \
                  links from every .md file, and requests each one. Exits 1 if any link \
                  did not answer 200 OK, which makes it usable as a CI gate."
)]
pub struct Cli {
    /// Directory to scan (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Skip every document whose path contains this text (empty = skip nothing)
    #[arg(long, default_value = "archive")]
    pub exclude: String,

    /// URL that anchor (#...) links are checked against
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// URL requested instead of the second link of every document
    #[arg(long, default_value = DEFAULT_SECOND_LINK_OVERRIDE)]
    pub second_link_override: String,

    /// Check the second link of each document like any other
    #[arg(long)]
    pub no_second_link_override: bool,

    /// Per-request timeout in seconds (no timeout by default)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// How many links to check at once
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Output the report as JSON instead of console lines
    #[arg(long)]
    pub json: bool,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    // Turns raw arguments into a validated AuditConfig
    pub fn audit_config(&self) -> Result<AuditConfig> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Cannot read current directory")?,
        };

        let base_url = ResolvedUrl::parse(&self.base_url).context("Invalid --base-url")?;
        let second_link_override = if self.no_second_link_override {
            None
        } else {
            Some(
                ResolvedUrl::parse(&self.second_link_override)
                    .context("Invalid --second-link-override")?,
            )
        };

        Ok(AuditConfig {
            root,
            exclude: self.exclude.clone(),
            resolver: Resolver::new(base_url, second_link_override),
            concurrency: usize::from(self.concurrency),
        })
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
