//! Per-column COE validator.
//!
//! `triglut-build --split` additionally writes `sin.coe`, `cos.coe`,
//! `tan.coe` and `cot.coe`. When present, each must hold one 4-digit record
//! per sample equal to the matching table column.

use std::path::Path;

use anyhow::Result;
use triglut::TrigTable;

use super::{load, Loaded};
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "coe/columns";

/// Hex digits in one single-column record.
const COLUMN_DIGITS: usize = 4;

/// Validates any per-column COE files in the artifacts directory.
///
/// # Errors
///
/// Returns an error if a present artifact cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let mut missing = Vec::new();

    for (name, column) in TrigTable::full().columns() {
        let file = format!("{name}.coe");
        let image = match load(&artifacts.join(&file))? {
            Loaded::Image(image) => image,
            Loaded::Missing => {
                missing.push(file);
                continue;
            }
            Loaded::Invalid(err) => {
                report.push(TestResult::fail(
                    VALIDATOR,
                    format!("{file} is not a valid COE document: {err}"),
                ));
                continue;
            }
        };

        if image.records.len() != column.len() {
            report.push(TestResult::fail(
                VALIDATOR,
                format!(
                    "{file}: wrong record count: expected {}, got {}",
                    column.len(),
                    image.records.len()
                ),
            ));
            continue;
        }

        let bad: Vec<String> = image
            .records
            .iter()
            .zip(column)
            .filter(|(record, expected)| {
                record.digits.len() != COLUMN_DIGITS || record.value as u16 as i16 != **expected
            })
            .map(|(record, expected)| {
                format!("line {}: {:?}, expected {expected}", record.line, record.digits)
            })
            .collect();
        if bad.is_empty() {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("{file} matches the {name} column"),
            ));
        } else {
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                format!("{file}: {} record(s) differ from the {name} column", bad.len()),
                bad,
            ));
        }
    }

    match missing.len() {
        0 => {}
        4 => report.push(TestResult::pass(
            VALIDATOR,
            "Per-column files not generated (skipped)",
        )),
        _ => report.push(TestResult::warn(
            VALIDATOR,
            format!("Incomplete per-column set, missing: {}", missing.join(", ")),
        )),
    }

    Ok(report)
}
