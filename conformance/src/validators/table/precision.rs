//! Encoding precision validator.
//!
//! Decoding a stored value must land within half an LSB (0.5 / 128) of the
//! real function value. Tangent and cotangent values beyond the clamp limit
//! must instead sit on the extreme of matching sign. Cardinal indices are
//! pinned and checked by `table/anchors`.

use triglut::fixed::{decode, Q_MAX, Q_MIN, SCALE};
use triglut::table::{angle, CLAMP_LIMIT, COT_EPSILON};
use triglut::{TrigTable, CARDINAL_ANGLES};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "table/precision";

/// Half an LSB plus room for the last bit of `f64` noise.
const TOLERANCE: f64 = 0.5 / SCALE + 1e-12;

/// Validates every non-cardinal entry of [`TrigTable::full`].
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let table = TrigTable::full();
    let pinned: Vec<usize> = CARDINAL_ANGLES.iter().map(|&(i, _)| i).collect();

    let mut bad = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
    for (index, entry) in table.entries().enumerate() {
        let theta = angle(index);
        check(&mut bad[0], index, entry.sin, theta.sin(), false);
        check(&mut bad[1], index, entry.cos, theta.cos(), false);
        if pinned.contains(&index) {
            continue;
        }
        let tan = theta.tan();
        check(&mut bad[2], index, entry.tan, tan, true);
        if tan.abs() < COT_EPSILON {
            let expected = if theta.cos() > 0.0 { Q_MAX } else { Q_MIN };
            if entry.cot != expected {
                bad[3].push(format!("index {index}: cot {} for tan≈0", entry.cot));
            }
        } else {
            check(&mut bad[3], index, entry.cot, 1.0 / tan, true);
        }
    }

    for ((name, _), bad) in table.columns().into_iter().zip(bad) {
        if bad.is_empty() {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("{name} within half an LSB of the real value"),
            ));
        } else {
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                format!("{} {name} value(s) out of tolerance", bad.len()),
                bad,
            ));
        }
    }

    report
}

fn check(bad: &mut Vec<String>, index: usize, stored: i16, real: f64, clamped: bool) {
    if clamped && real.abs() > CLAMP_LIMIT {
        let extreme = if real > 0.0 { Q_MAX } else { Q_MIN };
        if stored != extreme {
            bad.push(format!("index {index}: {real} stored as {stored}, expected {extreme}"));
        }
    } else if (decode(stored) - real).abs() > TOLERANCE {
        bad.push(format!("index {index}: {real} stored as {stored}"));
    }
}
