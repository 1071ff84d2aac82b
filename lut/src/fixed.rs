//! Q9.7 signed fixed-point encoding.
//!
//! A stored `i16` represents `stored / 128`: 9 integer bits (sign included)
//! and 7 fractional bits. Conversions saturate instead of wrapping, so every
//! real input maps to some representable value.
//!
//! ```
//! use triglut::fixed::{decode, encode, to_unsigned_hex};
//!
//! assert_eq!(encode(1.0), 128);
//! assert_eq!(encode(-0.5), -64);
//! assert_eq!(encode(1000.0), i16::MAX);
//! assert_eq!(decode(encode(0.25)), 0.25);
//! assert_eq!(to_unsigned_hex(-128), "ff80");
//! ```

/// Number of fractional bits in the Q9.7 format.
pub const FRAC_BITS: i32 = 7;

/// Scale factor between real values and stored integers (`2^FRAC_BITS`).
pub const SCALE: f64 = 128.0;

/// Largest storable value (`0x7fff`).
pub const Q_MAX: i16 = i16::MAX;

/// Smallest storable value (`0x8000`).
pub const Q_MIN: i16 = i16::MIN;

/// Encodes `value` as Q9.7, saturating at [`Q_MIN`]/[`Q_MAX`].
#[inline]
#[must_use]
pub fn encode(value: f64) -> i16 {
    encode_with(value, FRAC_BITS)
}

/// Encodes `value` with `frac_bits` fractional bits into a saturated `i16`.
///
/// The scaled value is rounded to nearest with ties to even. NaN encodes to 0.
#[must_use]
pub fn encode_with(value: f64, frac_bits: i32) -> i16 {
    let scaled = (value * 2f64.powi(frac_bits)).round_ties_even();
    if scaled.is_nan() {
        return 0;
    }
    // In range after the clamp, so the cast is exact.
    scaled.clamp(f64::from(Q_MIN), f64::from(Q_MAX)) as i16
}

/// Decodes a stored Q9.7 value back to its real value.
#[inline]
#[must_use]
pub fn decode(stored: i16) -> f64 {
    f64::from(stored) / SCALE
}

/// Renders a signed 16-bit value as 4 lowercase hex digits of its
/// two's-complement bit pattern (`-1` → `"ffff"`).
#[must_use]
pub fn to_unsigned_hex(stored: i16) -> String {
    format!("{:04x}", stored as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_values() {
        assert_eq!(encode(0.0), 0);
        assert_eq!(encode(1.0), 128);
        assert_eq!(encode(-1.0), -128);
        assert_eq!(encode(255.0), 32640);
    }

    #[test]
    fn ties_round_to_even() {
        // 0.5 / 128 scales to exactly 0.5, 1.5 / 128 to exactly 1.5.
        assert_eq!(encode(0.5 / SCALE), 0);
        assert_eq!(encode(1.5 / SCALE), 2);
        assert_eq!(encode(2.5 / SCALE), 2);
        assert_eq!(encode(-1.5 / SCALE), -2);
    }

    #[test]
    fn saturates_at_extremes() {
        assert_eq!(encode(256.0), Q_MAX);
        assert_eq!(encode(-256.0), Q_MIN);
        assert_eq!(encode(-256.5), Q_MIN);
        assert_eq!(encode(f64::INFINITY), Q_MAX);
        assert_eq!(encode(f64::NEG_INFINITY), Q_MIN);
        assert_eq!(encode(f64::NAN), 0);
    }

    #[test]
    fn custom_fraction_width() {
        assert_eq!(encode_with(1.0, 0), 1);
        assert_eq!(encode_with(1.0, 8), 256);
        assert_eq!(encode_with(200.0, 8), Q_MAX);
    }

    #[test]
    fn hex_uses_twos_complement() {
        assert_eq!(to_unsigned_hex(0), "0000");
        assert_eq!(to_unsigned_hex(128), "0080");
        assert_eq!(to_unsigned_hex(-1), "ffff");
        assert_eq!(to_unsigned_hex(-128), "ff80");
        assert_eq!(to_unsigned_hex(Q_MAX), "7fff");
        assert_eq!(to_unsigned_hex(Q_MIN), "8000");
    }
}
