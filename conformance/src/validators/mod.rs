//! Validators grouped by artifact.

pub mod coe;
pub mod json;
pub mod table;
