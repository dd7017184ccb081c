// src/report.rs
// =============================================================================
// Console output for an audit.
//
// Human-readable mode prints one bold line per bad link while the audit runs,
// then a bold "All links available." if nothing failed. JSON mode stays quiet
// during the run and prints the whole AuditReport at the end.
// =============================================================================

use crate::audit::{AuditReport, LinkFailure};
use anyhow::Result;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

pub const START_MESSAGE: &str = "Checking for dead links...";
pub const SUCCESS_MESSAGE: &str = "All links available.";

fn bold(text: &str) -> String {
    format!("{}{}{}", BOLD, text, RESET)
}

// The line printed for one bad link.
// A request that never got a response puts the URL on its own line.
pub fn failure_line(failure: &LinkFailure) -> String {
    let separator = if failure.reason.is_bad_status() { "" } else { "\n\n" };
    bold(&format!(
        "Bad link found in {}, search source for {}{}",
        failure.document.display(),
        separator,
        failure.url
    ))
}

pub fn print_failure(failure: &LinkFailure) {
    println!("{}", failure_line(failure));
}

// Last line of a console run
pub fn summary_line(report: &AuditReport) -> String {
    if report.is_clean() {
        bold(SUCCESS_MESSAGE)
    } else {
        format!("{} bad link(s) found.", report.failure_count())
    }
}

pub fn print_summary(report: &AuditReport) {
    println!("{}", summary_line(report));
}

pub fn print_json(report: &AuditReport) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    println!("{}", json_output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::{extract_markdown_links, ResolvedUrl};
    use crate::error::CheckFailure;
    use crate::scan::Document;

    fn failure(reason: CheckFailure) -> LinkFailure {
        LinkFailure {
            document: Document::new("guides/setup.md"),
            target: extract_markdown_links("[x](#install)").remove(0),
            url: ResolvedUrl::parse("https://example.com/").unwrap(),
            reason,
        }
    }

    #[test]
    fn test_bad_status_line() {
        let line = failure_line(&failure(CheckFailure::Status(404)));
        assert!(line.starts_with(BOLD));
        assert!(line.ends_with(RESET));
        assert!(line.contains("search source for https://example.com/"));
        assert!(line.contains(&format!(
            "Bad link found in {}",
            std::path::Path::new("guides/setup.md").display()
        )));
    }

    #[test]
    fn test_request_error_line_breaks_before_url() {
        let line = failure_line(&failure(CheckFailure::Connect));
        assert!(line.contains("search source for \n\nhttps://example.com/"));
    }

    #[test]
    fn test_clean_summary_is_bold_success() {
        let report = AuditReport::default();
        assert_eq!(
            summary_line(&report),
            format!("{}{}{}", BOLD, SUCCESS_MESSAGE, RESET)
        );
    }

    #[test]
    fn test_summary_counts_failures() {
        let report = AuditReport {
            documents_scanned: 1,
            links_checked: 2,
            failures: vec![failure(CheckFailure::Status(404)), failure(CheckFailure::Timeout)],
        };
        assert_eq!(summary_line(&report), "2 bad link(s) found.");
    }

    #[test]
    fn test_json_shape() {
        let report = AuditReport {
            documents_scanned: 2,
            links_checked: 3,
            failures: vec![failure(CheckFailure::Status(500))],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["documents_scanned"], 2);
        assert_eq!(value["links_checked"], 3);
        assert_eq!(value["failures"][0]["document"], "guides/setup.md");
        assert_eq!(value["failures"][0]["target"], "#install");
        assert_eq!(value["failures"][0]["url"], "https://example.com/");
        assert_eq!(value["failures"][0]["reason"]["kind"], "status");
        assert_eq!(value["failures"][0]["reason"]["detail"], 500);
    }
}
