//! Serializers for the trig table.
//!
//! - **COE** ([`coe`]): the memory-initialization file loaded into block RAM,
//!   either one 64-bit record per angle or one column per file. Also reads
//!   COE documents back.
//! - **JSON** ([`json`]): a machine-readable sidecar of the four columns.

pub mod coe;
#[cfg(feature = "serializers")]
pub mod json;
