// src/audit.rs
// =============================================================================
// This module runs a whole audit: discover -> extract -> resolve -> check.
//
// What happens here:
// 1. Find every markdown document under the root (minus excluded ones)
// 2. Read each document and extract its link targets
// 3. Resolve each target to a URL, using its position in the document
// 4. Check the URLs, in order, with up to `concurrency` requests in flight
// 5. Collect failures into an AuditReport
//
// Nothing in here is fatal per link: a failed check becomes a LinkFailure.
// Only problems with the root directory itself end the run early.
// =============================================================================

use crate::checker::{extract_markdown_links, LinkTarget, ResolvedUrl, Resolver, UrlCheck};
use crate::error::CheckFailure;
use crate::scan::{discover_documents, Document};
use anyhow::Result;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};

// Everything a run needs to know, built from the command line
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub root: PathBuf,
    pub exclude: String,
    pub resolver: Resolver,
    pub concurrency: usize,
}

/// One link that did not come back with 200 OK
#[derive(Debug, Clone, Serialize)]
pub struct LinkFailure {
    pub document: Document,
    pub target: LinkTarget,
    pub url: ResolvedUrl,
    pub reason: CheckFailure,
}

/// Outcome of a full run
#[derive(Debug, Default, Serialize)]
pub struct AuditReport {
    pub documents_scanned: usize,
    pub links_checked: usize,
    pub failures: Vec<LinkFailure>,
}

impl AuditReport {
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// True when nothing failed, including when there was nothing to check
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

// A single pending check
struct CheckJob {
    document: Document,
    target: LinkTarget,
    url: ResolvedUrl,
}

// Runs the audit
//
// Parameters:
//   config: root, exclusion keyword, resolver and concurrency
//   checker: URL checker to use (LinkChecker outside of tests)
//   on_failure: called for every failed link as soon as it is known,
//               in document/link order
//
// Returns: the full report, or an error if the root can't be walked
pub async fn run_audit<C, F>(
    config: &AuditConfig,
    checker: &C,
    mut on_failure: F,
) -> Result<AuditReport>
where
    C: UrlCheck,
    F: FnMut(&LinkFailure),
{
    let documents = discover_documents(&config.root, &config.exclude)?;

    let mut report = AuditReport::default();
    let mut jobs = Vec::new();

    for document in documents {
        let content = match tokio::fs::read(&document.path).await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                warn!(path = %document.display(), error = %e, "skipping unreadable document");
                continue;
            }
        };
        report.documents_scanned += 1;

        let targets = extract_markdown_links(&content);
        debug!(path = %document.display(), links = targets.len(), "extracted links");

        jobs.extend(targets.into_iter().enumerate().map(|(index, target)| CheckJob {
            url: config.resolver.resolve(&target, index),
            document: document.clone(),
            target,
        }));
    }

    report.links_checked = jobs.len();

    // buffered (not buffer_unordered) keeps results in job order
    let mut results = stream::iter(jobs)
        .map(|job| async move {
            let outcome = checker.check_url(job.url.as_str()).await;
            (job, outcome)
        })
        .buffered(config.concurrency.max(1));

    while let Some((job, outcome)) = results.next().await {
        if let Err(reason) = outcome {
            let failure = LinkFailure {
                document: job.document,
                target: job.target,
                url: job.url,
                reason,
            };
            on_failure(&failure);
            report.failures.push(failure);
        }
    }

    info!(
        documents = report.documents_scanned,
        links = report.links_checked,
        failures = report.failure_count(),
        "audit finished"
    );
    Ok(report)
}
