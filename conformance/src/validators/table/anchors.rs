//! Cardinal-angle validator.
//!
//! The asymptotes of tan and cot fall on 0°, 90°, 180° and 270°; those four
//! entries are pinned and must hold exactly these values.

use triglut::fixed::to_unsigned_hex;
use triglut::{Entry, TrigTable, CARDINAL_ANGLES};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "table/anchors";

/// Expected entries, in [`CARDINAL_ANGLES`] order.
const EXPECTED: [Entry; 4] = [
    Entry { sin: 0, cos: 128, tan: 0, cot: i16::MAX },
    Entry { sin: 128, cos: 0, tan: i16::MAX, cot: 0 },
    Entry { sin: 0, cos: -128, tan: 0, cot: i16::MIN },
    Entry { sin: -128, cos: 0, tan: i16::MIN, cot: 0 },
];

/// Validates the four cardinal entries of [`TrigTable::full`].
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let table = TrigTable::full();

    for ((index, label), expected) in CARDINAL_ANGLES.into_iter().zip(EXPECTED) {
        match table.entry(index) {
            Some(actual) if actual == expected => report.push(TestResult::pass(
                VALIDATOR,
                format!("{label} (index {index}) = {}", hex(actual)),
            )),
            Some(actual) => report.push(TestResult::fail(
                VALIDATOR,
                format!(
                    "{label} (index {index}): expected {}, got {}",
                    hex(expected),
                    hex(actual)
                ),
            )),
            None => report.push(TestResult::fail(
                VALIDATOR,
                format!("{label} (index {index}) is outside the table"),
            )),
        }
    }

    report
}

fn hex(e: Entry) -> String {
    format!(
        "sin {} cos {} tan {} cot {}",
        to_unsigned_hex(e.sin),
        to_unsigned_hex(e.cos),
        to_unsigned_hex(e.tan),
        to_unsigned_hex(e.cot)
    )
}
