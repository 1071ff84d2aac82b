//! JSON sidecar for the trig table.
//!
//! Carries the format parameters next to the four columns so downstream
//! tooling can decode values without hard-coding Q9.7.

use serde_json::{json, Value};

use crate::fixed::{FRAC_BITS, SCALE};
use crate::table::{TrigTable, ANGLE_STEP, CLAMP_LIMIT};

/// Serializes the table to a JSON `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json(table: &TrigTable) -> Value {
    json!({
        "format": {
            "name": "Q9.7",
            "width": 16,
            "frac_bits": FRAC_BITS,
            "scale": SCALE,
            "signed": true
        },
        "samples": table.len(),
        "angle_step": ANGLE_STEP,
        "clamp_limit": CLAMP_LIMIT,
        "layout": ["sin", "cos", "tan", "cot"],
        "sin": table.sin(),
        "cos": table.cos(),
        "tan": table.tan(),
        "cot": table.cot()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SAMPLES;

    #[test]
    fn carries_format_and_columns() {
        let value = to_json(TrigTable::full());
        assert_eq!(value["format"]["frac_bits"], 7);
        assert_eq!(value["samples"], SAMPLES);
        for name in ["sin", "cos", "tan", "cot"] {
            assert_eq!(
                value[name].as_array().map(Vec::len),
                Some(SAMPLES),
                "column {name}"
            );
        }
        assert_eq!(value["cos"][0], 128);
        assert_eq!(value["cot"][512], -32768);
    }
}
