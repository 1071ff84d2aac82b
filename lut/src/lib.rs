//! Fixed-point trigonometric lookup table for block-RAM initialization.
//!
//! The `triglut` crate samples sine, cosine, tangent and cotangent at 1024
//! evenly spaced angles over a full turn, encodes each value as Q9.7 signed
//! fixed point, and serializes the result as a COE memory-initialization
//! file (one 64-bit word per angle).
//!
//! # Entry Point
//!
//! ```
//! let table = triglut::TrigTable::full();
//! assert_eq!(table.len(), 1024);
//! assert_eq!(table.cos()[0], 128);
//! ```
//!
//! # Serialization
//!
//! ```
//! let table = triglut::TrigTable::full();
//! let coe = triglut::serializer::coe::to_coe(table);
//! assert!(coe.ends_with(";\n"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod fixed;
pub mod serializer;
pub mod table;

pub use serializer::coe::CoeError;
pub use table::{Entry, TrigTable, CARDINAL_ANGLES, SAMPLES};
