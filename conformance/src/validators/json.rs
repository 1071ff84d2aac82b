//! JSON sidecar validator.
//!
//! When `triglut.json` is present it must declare the Q9.7 format and carry
//! the four columns exactly as built.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use triglut::fixed::FRAC_BITS;
use triglut::{TrigTable, SAMPLES};

use crate::report::{ConformanceReport, TestResult};
use crate::SIDECAR_JSON;

const VALIDATOR: &str = "json/sidecar";

/// Validates `triglut.json` if it exists.
///
/// # Errors
///
/// Returns an error if the sidecar exists but cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let path = artifacts.join(SIDECAR_JSON);
    if !path.exists() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{SIDECAR_JSON} not generated (skipped)"),
        ));
        return Ok(report);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(err) => {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("{SIDECAR_JSON} is not valid JSON: {err}"),
            ));
            return Ok(report);
        }
    };

    if value["format"]["frac_bits"] == FRAC_BITS && value["samples"] == SAMPLES {
        report.push(TestResult::pass(VALIDATOR, "Format block declares Q9.7 x 1024"));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "Wrong format block: frac_bits={}, samples={}",
                value["format"]["frac_bits"], value["samples"]
            ),
        ));
    }

    for (name, column) in TrigTable::full().columns() {
        let stored: Option<Vec<i64>> = value[name]
            .as_array()
            .and_then(|items| items.iter().map(Value::as_i64).collect());
        let expected: Vec<i64> = column.iter().map(|&v| i64::from(v)).collect();
        match stored {
            Some(stored) if stored == expected => report.push(TestResult::pass(
                VALIDATOR,
                format!("{name} column matches"),
            )),
            Some(_) => report.push(TestResult::fail(
                VALIDATOR,
                format!("{name} column differs from the generated table"),
            )),
            None => report.push(TestResult::fail(
                VALIDATOR,
                format!("{name} column missing or not an integer array"),
            )),
        }
    }

    Ok(report)
}
