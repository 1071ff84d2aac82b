//! COE artifact validators (framing, combined records, per-column files).

pub mod columns;
pub mod records;
pub mod structure;

use std::io::ErrorKind;
use std::path::Path;

use anyhow::Result;
use triglut::serializer::coe::{self, CoeImage};
use triglut::CoeError;

/// Outcome of loading a COE artifact.
pub(crate) enum Loaded {
    /// Parsed successfully.
    Image(CoeImage),
    /// The file does not exist.
    Missing,
    /// The file exists but is not a valid COE document.
    Invalid(CoeError),
}

/// Reads and parses `path`, turning parse problems and non-UTF-8 content
/// into [`Loaded::Invalid`].
///
/// Other I/O failures are returned as errors.
pub(crate) fn load(path: &Path) -> Result<Loaded> {
    if !path.exists() {
        return Ok(Loaded::Missing);
    }
    match coe::read_coe(path) {
        Ok(image) => Ok(Loaded::Image(image)),
        Err(err @ CoeError::Io { .. }) if !is_invalid_data(&err) => Err(err.into()),
        Err(err) => Ok(Loaded::Invalid(err)),
    }
}

fn is_invalid_data(err: &CoeError) -> bool {
    matches!(err, CoeError::Io { source, .. } if source.kind() == ErrorKind::InvalidData)
}
