//! COE record validator.
//!
//! Every record of `triglut.coe` must be exactly 16 lowercase hex digits
//! and equal the record rebuilt from [`TrigTable::full`].

use std::path::Path;

use anyhow::Result;
use triglut::serializer::coe::RECORD_DIGITS;
use triglut::{Entry, TrigTable};

use super::{load, Loaded};
use crate::report::{ConformanceReport, TestResult};
use crate::COMBINED_COE;

const VALIDATOR: &str = "coe/records";

/// Validates record formatting and contents of `triglut.coe`.
///
/// # Errors
///
/// Returns an error if the artifact exists but cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    // Missing or malformed files are reported by coe/structure.
    let Loaded::Image(image) = load(&artifacts.join(COMBINED_COE))? else {
        return Ok(report);
    };

    let badly_formed: Vec<String> = image
        .records
        .iter()
        .filter(|r| {
            r.digits.len() != RECORD_DIGITS
                || r.digits.bytes().any(|b| b.is_ascii_uppercase())
        })
        .map(|r| format!("line {}: {:?}", r.line, r.digits))
        .collect();
    if badly_formed.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("All records are {RECORD_DIGITS} lowercase hex digits"),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{} record(s) are not {RECORD_DIGITS} lowercase hex digits", badly_formed.len()),
            badly_formed,
        ));
    }

    let table = TrigTable::full();
    let mismatches: Vec<String> = image
        .records
        .iter()
        .zip(table.entries())
        .enumerate()
        .filter(|(_, (record, entry))| record.value != entry.record())
        .map(|(index, (record, entry))| {
            format!(
                "index {index}: got {:?}, expected {:?}",
                Entry::from_record(record.value),
                entry
            )
        })
        .collect();
    if mismatches.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "Record values match the generated table",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{} record(s) differ from the generated table", mismatches.len()),
            mismatches,
        ));
    }

    Ok(report)
}
