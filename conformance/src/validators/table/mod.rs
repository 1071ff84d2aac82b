//! Validators that operate on the live table (no file I/O).

pub mod anchors;
pub mod precision;
