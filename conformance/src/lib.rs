//! TrigLUT conformance suite.
//!
//! Re-reads the artifacts written by `triglut-build` and checks them against
//! the table contract: file framing, record contents, the pinned cardinal
//! angles and the encoding precision.
//!
//! # Conformance Scope
//!
//! | Artifact | Checks |
//! |----------|--------|
//! | `triglut.coe` | radix 16, 3 header lines, 1024 × 16-digit records, `,`/`;` terminators, values equal a fresh build |
//! | `{sin,cos,tan,cot}.coe` | optional; 1024 × 4-digit records equal to the matching column |
//! | `triglut.json` | optional; format block and the four columns |
//! | live table | cardinal angles, half-LSB precision |
//!
//! # Entry Point
//!
//! ```no_run
//! use triglut_conformance::{run_all, ArtifactPaths};
//! use std::path::PathBuf;
//!
//! let paths = ArtifactPaths {
//!     artifacts: PathBuf::from("."),
//! };
//! let report = run_all(&paths).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

pub use report::{ConformanceReport, Severity, TestResult};

/// File name of the combined table.
pub const COMBINED_COE: &str = "triglut.coe";

/// File name of the JSON sidecar.
pub const SIDECAR_JSON: &str = "triglut.json";

/// Paths required by the conformance runner.
pub struct ArtifactPaths {
    /// Directory containing the built artifacts (`triglut.coe`, ...).
    pub artifacts: std::path::PathBuf,
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. COE framing (`coe/structure`)
/// 2. COE record contents (`coe/records`)
/// 3. Per-column COE files, when present (`coe/columns`)
/// 4. JSON sidecar, when present (`json/sidecar`)
/// 5. Cardinal angles (`table/anchors`)
/// 6. Encoding precision (`table/precision`)
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(paths: &ArtifactPaths) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    report.extend(validators::coe::structure::validate(&paths.artifacts)?);
    report.extend(validators::coe::records::validate(&paths.artifacts)?);
    report.extend(validators::coe::columns::validate(&paths.artifacts)?);
    report.extend(validators::json::validate(&paths.artifacts)?);

    // Live table, no file I/O
    report.extend(validators::table::anchors::validate());
    report.extend(validators::table::precision::validate());

    Ok(report)
}
