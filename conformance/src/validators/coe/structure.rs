//! COE framing validator.
//!
//! Verifies the combined artifact's layout:
//! - radix declaration of 16 and a vector marker
//! - exactly 3 header lines before the first record
//! - exactly 1024 records, one per line, nothing else in the vector
//! - every record `,`-terminated except the last, which ends with `;`

use std::path::Path;

use anyhow::{Context, Result};
use triglut::serializer::coe::{self, HEADER_LINES};
use triglut::SAMPLES;

use crate::report::{ConformanceReport, TestResult};
use crate::COMBINED_COE;

const VALIDATOR: &str = "coe/structure";

/// Validates the framing of `triglut.coe` in the artifacts directory.
///
/// # Errors
///
/// Returns an error if the artifact exists but cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let path = artifacts.join(COMBINED_COE);
    if !path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{COMBINED_COE} not found in artifacts directory"),
        ));
        return Ok(report);
    }
    let bytes =
        std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let Ok(text) = String::from_utf8(bytes) else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{COMBINED_COE} is not valid UTF-8 text"),
        ));
        return Ok(report);
    };

    let image = match coe::parse(&text) {
        Ok(image) => image,
        Err(err) => {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("{COMBINED_COE} is not a valid COE document: {err}"),
            ));
            return Ok(report);
        }
    };
    report.push(TestResult::pass(VALIDATOR, "Radix 16 and vector marker present"));

    if image.header_lines == HEADER_LINES {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("Header is {HEADER_LINES} lines"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "Wrong header length: expected {HEADER_LINES} lines, got {}",
                image.header_lines
            ),
        ));
    }

    if image.records.len() == SAMPLES {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("Correct record count: {SAMPLES}"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "Wrong record count: expected {SAMPLES}, got {}",
                image.records.len()
            ),
        ));
    }

    check_data_lines(&text, &mut report);

    Ok(report)
}

/// Every line after the header must be a record with its terminator.
fn check_data_lines(text: &str, report: &mut ConformanceReport) {
    let data: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .skip(HEADER_LINES)
        .map(|(i, line)| (i + 1, line))
        .collect();
    let last = data.len().saturating_sub(1);

    let mut bad = Vec::new();
    for (pos, &(line_no, line)) in data.iter().enumerate() {
        let expected = if pos == last { ';' } else { ',' };
        if !line.ends_with(expected) {
            bad.push(format!("line {line_no}: expected '{expected}' terminator: {line:?}"));
        }
    }

    if bad.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "Records are ','-terminated with a final ';'",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{} data line(s) with a wrong terminator", bad.len()),
            bad,
        ));
    }
}
