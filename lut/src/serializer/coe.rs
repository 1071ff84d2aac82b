//! COE (memory-initialization) serializer and reader.
//!
//! A COE document is a radix declaration followed by a comma-separated
//! vector of values terminated with `;`. The combined table uses one
//! 16-hex-digit record per angle, `sin cos tan cot` from the most
//! significant half-word down:
//!
//! ```text
//! ; TrigLUT: 1024 x 64-bit [sin(15:0), cos(15:0), tan(15:0), cot(15:0)], Q9.7 signed
//! memory_initialization_radix=16;
//! memory_initialization_vector=
//! 0000008000007fff,
//! 000100800001517c,
//! ...
//! ffff0080ffffae84;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::fixed::to_unsigned_hex;
use crate::table::{TrigTable, SAMPLES};

/// Radix declaration line.
pub const RADIX_DECL: &str = "memory_initialization_radix=16;";

/// Vector-start marker line.
pub const VECTOR_DECL: &str = "memory_initialization_vector=";

/// Lines preceding the first record in every document this module writes.
pub const HEADER_LINES: usize = 3;

/// Hex digits in one combined record.
pub const RECORD_DIGITS: usize = 16;

const RADIX_KEY: &str = "memory_initialization_radix";
const VECTOR_KEY: &str = "memory_initialization_vector";

/// Errors produced while reading or writing COE documents.
#[derive(Debug, thiserror::Error)]
pub enum CoeError {
    /// The document ended without any records.
    #[error("COE document contains no records")]
    Empty,

    /// A record or vector marker appeared before the radix declaration.
    #[error("line {line}: memory_initialization_radix must precede the vector")]
    MissingRadix {
        /// 1-based line number.
        line: usize,
    },

    /// The radix is not hexadecimal.
    #[error("line {line}: unsupported radix {radix} (only 16 is read)")]
    UnsupportedRadix {
        /// 1-based line number.
        line: usize,
        /// Declared radix text.
        radix: String,
    },

    /// The document has no `memory_initialization_vector=` marker.
    #[error("memory_initialization_vector marker not found")]
    MissingVector,

    /// A header line is neither a comment nor a declaration.
    #[error("line {line}: unexpected header line {text:?}")]
    UnexpectedLine {
        /// 1-based line number.
        line: usize,
        /// Offending text.
        text: String,
    },

    /// A record is not a hex number of at most 16 digits.
    #[error("line {line}: invalid record {text:?}")]
    InvalidRecord {
        /// 1-based line number.
        line: usize,
        /// Offending text.
        text: String,
    },

    /// A record is followed by neither `,` nor `;`.
    #[error("line {line}: record is missing its ',' or ';' terminator")]
    MissingTerminator {
        /// 1-based line number.
        line: usize,
    },

    /// The last record ends with `,` instead of `;`.
    #[error("line {line}: vector is not closed with ';'")]
    Unterminated {
        /// 1-based line number of the last record.
        line: usize,
    },

    /// Non-comment content after the closing `;`.
    #[error("line {line}: data after the closing ';'")]
    TrailingData {
        /// 1-based line number.
        line: usize,
    },

    /// Reading or writing a file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File that could not be accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// One value of the initialization vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the source document.
    pub line: usize,
    /// Hex digits exactly as written.
    pub digits: String,
    /// Parsed value.
    pub value: u64,
}

/// A parsed COE document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoeImage {
    /// Comment lines (without the leading `;`) before the vector.
    pub comments: Vec<String>,
    /// Declared radix.
    pub radix: u32,
    /// Number of lines before the first record.
    pub header_lines: usize,
    /// The initialization vector in order.
    pub records: Vec<Record>,
}

/// Serializes the combined table: one 64-bit record per angle index.
#[must_use]
pub fn to_coe(table: &TrigTable) -> String {
    let mut out = String::with_capacity(64 + table.len() * (RECORD_DIGITS + 2));
    out.push_str(&format!(
        "; TrigLUT: {SAMPLES} x 64-bit [sin(15:0), cos(15:0), tan(15:0), cot(15:0)], Q9.7 signed\n"
    ));
    out.push_str(RADIX_DECL);
    out.push('\n');
    out.push_str(VECTOR_DECL);
    out.push('\n');

    let last = table.len().saturating_sub(1);
    for (i, entry) in table.entries().enumerate() {
        out.push_str(&to_unsigned_hex(entry.sin));
        out.push_str(&to_unsigned_hex(entry.cos));
        out.push_str(&to_unsigned_hex(entry.tan));
        out.push_str(&to_unsigned_hex(entry.cot));
        out.push_str(terminator(i, last));
    }
    out
}

/// Serializes a single 16-bit column, one 4-digit record per line.
#[must_use]
pub fn to_single_coe(values: &[i16], description: &str) -> String {
    let mut out = String::with_capacity(64 + values.len() * 6);
    out.push_str(&format!(
        "; {description}: {} x 16-bit, Q9.7 signed\n",
        values.len()
    ));
    out.push_str(RADIX_DECL);
    out.push('\n');
    out.push_str(VECTOR_DECL);
    out.push('\n');

    let last = values.len().saturating_sub(1);
    for (i, &value) in values.iter().enumerate() {
        out.push_str(&to_unsigned_hex(value));
        out.push_str(terminator(i, last));
    }
    out
}

fn terminator(index: usize, last: usize) -> &'static str {
    if index == last {
        ";\n"
    } else {
        ",\n"
    }
}

/// Writes a serialized document, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`CoeError::Io`] if the directory cannot be created or the file
/// cannot be written.
pub fn write_coe(path: &Path, contents: &str) -> Result<(), CoeError> {
    let io_err = |source| CoeError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)
}

/// Reads and parses a COE file.
///
/// # Errors
///
/// Returns [`CoeError::Io`] if the file cannot be read, or any parse error
/// from [`parse`].
pub fn read_coe(path: &Path) -> Result<CoeImage, CoeError> {
    let text = fs::read_to_string(path).map_err(|source| CoeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

/// Parses a hexadecimal COE document.
///
/// Blank lines and `;` comments are allowed anywhere outside the vector
/// values; each value must sit on its own line.
///
/// # Errors
///
/// Returns a [`CoeError`] describing the first structural problem found.
pub fn parse(text: &str) -> Result<CoeImage, CoeError> {
    let mut comments = Vec::new();
    let mut radix = None;
    let mut in_vector = false;
    let mut closed = false;
    let mut header_lines = 0;
    let mut records: Vec<Record> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();

        if !in_vector {
            header_lines = line;
            if trimmed.is_empty() {
                continue;
            }
            if let Some(comment) = trimmed.strip_prefix(';') {
                comments.push(comment.trim().to_owned());
            } else if let Some(value) = declaration(trimmed, RADIX_KEY) {
                let value = value.trim_end_matches(';').trim();
                if value != "16" {
                    return Err(CoeError::UnsupportedRadix {
                        line,
                        radix: value.to_owned(),
                    });
                }
                radix = Some(16);
            } else if let Some(rest) = declaration(trimmed, VECTOR_KEY) {
                if radix.is_none() {
                    return Err(CoeError::MissingRadix { line });
                }
                if !rest.trim().is_empty() {
                    return Err(CoeError::InvalidRecord {
                        line,
                        text: rest.trim().to_owned(),
                    });
                }
                in_vector = true;
            } else {
                return Err(CoeError::UnexpectedLine {
                    line,
                    text: trimmed.to_owned(),
                });
            }
            continue;
        }

        if trimmed.is_empty() || trimmed.starts_with(';') {
            continue;
        }
        if closed {
            return Err(CoeError::TrailingData { line });
        }

        let (body, is_last) = if let Some(body) = trimmed.strip_suffix(',') {
            (body, false)
        } else if let Some(body) = trimmed.strip_suffix(';') {
            (body, true)
        } else {
            return Err(CoeError::MissingTerminator { line });
        };
        let digits = body.trim();
        let value = parse_hex(digits).ok_or_else(|| CoeError::InvalidRecord {
            line,
            text: digits.to_owned(),
        })?;
        records.push(Record {
            line,
            digits: digits.to_owned(),
            value,
        });
        closed = is_last;
    }

    let Some(radix) = radix else {
        return Err(CoeError::MissingRadix {
            line: header_lines.max(1),
        });
    };
    if !in_vector {
        return Err(CoeError::MissingVector);
    }
    let Some(last) = records.last() else {
        return Err(CoeError::Empty);
    };
    if !closed {
        return Err(CoeError::Unterminated { line: last.line });
    }

    Ok(CoeImage {
        comments,
        radix,
        header_lines,
        records,
    })
}

/// Returns the text after `key` and `=` if `line` declares `key`.
fn declaration<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.strip_prefix(key)?.trim_start().strip_prefix('=')
}

fn parse_hex(digits: &str) -> Option<u64> {
    if digits.is_empty()
        || digits.len() > RECORD_DIGITS
        || !digits.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Entry;

    #[test]
    fn combined_layout() {
        let coe = to_coe(TrigTable::full());
        let lines: Vec<&str> = coe.lines().collect();
        assert_eq!(lines.len(), HEADER_LINES + SAMPLES);
        assert!(lines[0].starts_with(';'));
        assert_eq!(lines[1], RADIX_DECL);
        assert_eq!(lines[2], VECTOR_DECL);

        let data = &lines[HEADER_LINES..];
        for line in &data[..SAMPLES - 1] {
            assert!(line.ends_with(','), "expected ',' terminator: {line}");
            assert_eq!(line.len(), RECORD_DIGITS + 1);
        }
        assert_eq!(data[SAMPLES - 1].len(), RECORD_DIGITS + 1);
        assert!(data[SAMPLES - 1].ends_with(';'));
        assert!(coe.ends_with(";\n"));
    }

    #[test]
    fn cardinal_records() {
        let coe = to_coe(TrigTable::full());
        let data: Vec<&str> = coe.lines().skip(HEADER_LINES).collect();
        assert_eq!(data[0], "0000008000007fff,");
        assert_eq!(data[256], "008000007fff0000,");
        assert_eq!(data[512], "0000ff8000008000,");
        assert_eq!(data[768], "ff80000080000000,");
    }

    #[test]
    fn single_column_layout() {
        let coe = to_single_coe(&[0, 128, -1, -32768], "sin");
        assert_eq!(
            coe,
            "; sin: 4 x 16-bit, Q9.7 signed\n\
             memory_initialization_radix=16;\n\
             memory_initialization_vector=\n\
             0000,\n0080,\nffff,\n8000;\n"
        );
    }

    #[test]
    fn parse_reads_back_written_table() -> Result<(), CoeError> {
        let table = TrigTable::full();
        let image = parse(&to_coe(table))?;
        assert_eq!(image.radix, 16);
        assert_eq!(image.header_lines, HEADER_LINES);
        assert_eq!(image.comments.len(), 1);
        assert_eq!(image.records.len(), SAMPLES);
        assert_eq!(image.records[0].line, HEADER_LINES + 1);
        for (record, entry) in image.records.iter().zip(table.entries()) {
            assert_eq!(Entry::from_record(record.value), entry);
        }
        Ok(())
    }

    #[test]
    fn parse_tolerates_blank_lines_and_comments() -> Result<(), CoeError> {
        let text = "; a\n\n; b\nmemory_initialization_radix = 16;\nmemory_initialization_vector=\n1,\n; mid\nff;\n\n";
        let image = parse(text)?;
        assert_eq!(image.comments, vec!["a", "b"]);
        assert_eq!(image.header_lines, 5);
        let values: Vec<u64> = image.records.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![1, 0xff]);
        Ok(())
    }

    #[test]
    fn parse_errors() {
        let vector = "memory_initialization_vector=\n";
        let radix = "memory_initialization_radix=16;\n";
        assert!(matches!(parse(""), Err(CoeError::MissingRadix { .. })));
        assert!(matches!(
            parse(&format!("{vector}1;\n")),
            Err(CoeError::MissingRadix { line: 1 })
        ));
        assert!(matches!(
            parse("memory_initialization_radix=10;\n"),
            Err(CoeError::UnsupportedRadix { line: 1, .. })
        ));
        assert!(matches!(parse(radix), Err(CoeError::MissingVector)));
        assert!(matches!(
            parse(&format!("{radix}garbage\n")),
            Err(CoeError::UnexpectedLine { line: 2, .. })
        ));
        assert!(matches!(
            parse(&format!("{radix}{vector}")),
            Err(CoeError::Empty)
        ));
        assert!(matches!(
            parse(&format!("{radix}{vector}00zz,\n")),
            Err(CoeError::InvalidRecord { line: 3, .. })
        ));
        assert!(matches!(
            parse(&format!("{radix}{vector}0000\n")),
            Err(CoeError::MissingTerminator { line: 3 })
        ));
        assert!(matches!(
            parse(&format!("{radix}{vector}0000,\n0001,\n")),
            Err(CoeError::Unterminated { line: 4 })
        ));
        assert!(matches!(
            parse(&format!("{radix}{vector}0000;\n0001;\n")),
            Err(CoeError::TrailingData { line: 4 })
        ));
        assert!(matches!(
            parse(&format!("{radix}{vector}00000000000000000;\n")),
            Err(CoeError::InvalidRecord { .. })
        ));
    }
}
