//! The 1024-entry sin/cos/tan/cot table.
//!
//! Angles are sampled uniformly over a full turn: index `i` maps to
//! `i × 2π / 1024` radians. Tangent and cotangent are unbounded, so the four
//! cardinal indices are pinned to exact values and every other index clamps
//! to an extreme once the real value leaves ±[`CLAMP_LIMIT`].

use std::f64::consts::PI;
use std::sync::OnceLock;

use crate::fixed::{encode, Q_MAX, Q_MIN};

/// Number of angle samples in one full turn.
pub const SAMPLES: usize = 1024;

/// Radians between two consecutive samples.
pub const ANGLE_STEP: f64 = 2.0 * PI / SAMPLES as f64;

/// Magnitude above which tan/cot are stored as a saturated extreme.
pub const CLAMP_LIMIT: f64 = 255.0;

/// Tangent magnitude below which the cotangent counts as infinite.
pub const COT_EPSILON: f64 = 1e-6;

/// Index of 0°.
pub const DEG_0: usize = 0;
/// Index of 90°.
pub const DEG_90: usize = SAMPLES / 4;
/// Index of 180°.
pub const DEG_180: usize = SAMPLES / 2;
/// Index of 270°.
pub const DEG_270: usize = SAMPLES * 3 / 4;

/// The cardinal indices and their labels, in angle order.
pub const CARDINAL_ANGLES: [(usize, &str); 4] = [
    (DEG_0, "0°"),
    (DEG_90, "90°"),
    (DEG_180, "180°"),
    (DEG_270, "270°"),
];

/// Returns the angle in radians sampled at `index`.
#[inline]
#[must_use]
pub fn angle(index: usize) -> f64 {
    index as f64 * ANGLE_STEP
}

/// The four encoded values at one angle index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
    /// Sine.
    pub sin: i16,
    /// Cosine.
    pub cos: i16,
    /// Tangent.
    pub tan: i16,
    /// Cotangent.
    pub cot: i16,
}

impl Entry {
    /// Computes the entry for `index`.
    ///
    /// Indices outside `0..SAMPLES` are accepted and sampled on the same
    /// grid, but only the cardinal indices inside one turn are pinned.
    #[must_use]
    pub fn at(index: usize) -> Self {
        let theta = angle(index);
        let cos_val = theta.cos();
        let (tan, cot) = tan_cot(index, theta, cos_val);
        Self {
            sin: encode(theta.sin()),
            cos: encode(cos_val),
            tan,
            cot,
        }
    }

    /// Packs the entry into one 64-bit memory word:
    /// `sin[63:48] cos[47:32] tan[31:16] cot[15:0]`.
    #[must_use]
    pub fn record(self) -> u64 {
        (u64::from(self.sin as u16) << 48)
            | (u64::from(self.cos as u16) << 32)
            | (u64::from(self.tan as u16) << 16)
            | u64::from(self.cot as u16)
    }

    /// Splits a 64-bit memory word back into its four values.
    #[must_use]
    pub fn from_record(word: u64) -> Self {
        Self {
            sin: (word >> 48) as u16 as i16,
            cos: (word >> 32) as u16 as i16,
            tan: (word >> 16) as u16 as i16,
            cot: word as u16 as i16,
        }
    }
}

/// Encoded tangent and cotangent at `index`.
fn tan_cot(index: usize, theta: f64, cos_val: f64) -> (i16, i16) {
    match index {
        DEG_90 => (Q_MAX, 0),
        DEG_270 => (Q_MIN, 0),
        DEG_0 => (0, Q_MAX),
        DEG_180 => (0, Q_MIN),
        _ => {
            // tan() directly: sin/cos division loses precision near the poles.
            let tan_val = theta.tan();
            let cot = if tan_val.abs() < COT_EPSILON {
                if cos_val > 0.0 {
                    Q_MAX
                } else {
                    Q_MIN
                }
            } else {
                clamp_encode(1.0 / tan_val)
            };
            (clamp_encode(tan_val), cot)
        }
    }
}

/// Encodes `value`, mapping anything beyond ±[`CLAMP_LIMIT`] to an extreme.
fn clamp_encode(value: f64) -> i16 {
    if value > CLAMP_LIMIT {
        Q_MAX
    } else if value < -CLAMP_LIMIT {
        Q_MIN
    } else {
        encode(value)
    }
}

/// Four index-aligned Q9.7 sequences: sin, cos, tan, cot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrigTable {
    sin: Vec<i16>,
    cos: Vec<i16>,
    tan: Vec<i16>,
    cot: Vec<i16>,
}

impl TrigTable {
    /// Computes a fresh table.
    #[must_use]
    pub fn build() -> Self {
        let mut table = Self {
            sin: Vec::with_capacity(SAMPLES),
            cos: Vec::with_capacity(SAMPLES),
            tan: Vec::with_capacity(SAMPLES),
            cot: Vec::with_capacity(SAMPLES),
        };
        for index in 0..SAMPLES {
            let entry = Entry::at(index);
            table.sin.push(entry.sin);
            table.cos.push(entry.cos);
            table.tan.push(entry.tan);
            table.cot.push(entry.cot);
        }
        table
    }

    /// Returns the process-wide table, computing it on first use.
    #[must_use]
    pub fn full() -> &'static TrigTable {
        static TABLE: OnceLock<TrigTable> = OnceLock::new();
        TABLE.get_or_init(TrigTable::build)
    }

    /// Number of entries (always [`SAMPLES`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.sin.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sin.is_empty()
    }

    /// Encoded sines.
    #[must_use]
    pub fn sin(&self) -> &[i16] {
        &self.sin
    }

    /// Encoded cosines.
    #[must_use]
    pub fn cos(&self) -> &[i16] {
        &self.cos
    }

    /// Encoded tangents.
    #[must_use]
    pub fn tan(&self) -> &[i16] {
        &self.tan
    }

    /// Encoded cotangents.
    #[must_use]
    pub fn cot(&self) -> &[i16] {
        &self.cot
    }

    /// The entry at `index`, or `None` past the end.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<Entry> {
        Some(Entry {
            sin: *self.sin.get(index)?,
            cos: *self.cos.get(index)?,
            tan: *self.tan.get(index)?,
            cot: *self.cot.get(index)?,
        })
    }

    /// Iterates over all entries in index order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = Entry> + '_ {
        (0..self.len()).map(move |i| Entry {
            sin: self.sin[i],
            cos: self.cos[i],
            tan: self.tan[i],
            cot: self.cot[i],
        })
    }

    /// The four columns with their names, in record order.
    #[must_use]
    pub fn columns(&self) -> [(&'static str, &[i16]); 4] {
        [
            ("sin", &self.sin),
            ("cos", &self.cos),
            ("tan", &self.tan),
            ("cot", &self.cot),
        ]
    }
}
