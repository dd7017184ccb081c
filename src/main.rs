// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr)
// 3. Run the audit, printing bad links as they are found
// 4. Exit with proper code (0 = all links fine, 1 = bad links, 2 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod audit;    // src/audit.rs - runs the whole pipeline
mod checker;  // src/checker/ - link extraction, resolution and HTTP checks
mod cli;      // src/cli.rs - command-line parsing
mod error;    // src/error.rs - per-link failure reasons
mod report;   // src/report.rs - console and JSON output
mod scan;     // src/scan/ - document discovery
#[cfg(test)]
mod test_support;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so they never mix with the report on stdout.
// RUST_LOG wins over --verbose when set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// This is the main application logic
// Returns:
//   Ok(0) = no bad links (or nothing to check)
//   Ok(1) = at least one bad link
//   Err = could not run the audit at all
async fn run(cli: Cli) -> Result<i32> {
    let config = cli.audit_config()?;
    let checker = checker::LinkChecker::new(cli.request_timeout())?;

    if let Some(pinned) = config.resolver.second_link_override() {
        warn!(
            url = %pinned,
            "the second link of every document is checked as this URL (disable with --no-second-link-override)"
        );
    }

    let report = if cli.json {
        let report = audit::run_audit(&config, &checker, |_| {}).await?;
        report::print_json(&report)?;
        report
    } else {
        println!("{}", report::START_MESSAGE);
        let report = audit::run_audit(&config, &checker, report::print_failure).await?;
        report::print_summary(&report);
        report
    };

    if report.is_clean() {
        Ok(0)
    } else {
        Ok(1)
    }
}
