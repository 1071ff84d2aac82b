//! `triglut-conformance` — Validates TrigLUT artifacts against the table contract.
//!
//! Checks the combined COE file's framing and records, any per-column COE
//! files and JSON sidecar that were generated, and the live table's cardinal
//! angles and precision.
//!
//! **Usage:**
//! ```
//! triglut-conformance [--artifacts <path>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use triglut_conformance::{run_all, ArtifactPaths};

/// Run the TrigLUT conformance suite.
#[derive(Parser)]
#[command(
    name = "triglut-conformance",
    about = "Validate TrigLUT artifacts against the table contract"
)]
struct Args {
    /// Directory containing triglut.coe (default: current directory).
    #[arg(long, default_value = ".")]
    artifacts: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let report = run_all(&ArtifactPaths {
        artifacts: args.artifacts,
    })?;

    println!("TrigLUT Conformance Report");
    println!("==========================");
    println!();

    for result in &report.results {
        println!("{result}");
    }

    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.pass_count(),
        report.warning_count(),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
