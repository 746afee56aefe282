//! Inventory decoding
//!
//! Parses the persisted text format line by line, tolerating and
//! reporting malformed lines without aborting.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use thiserror::Error;

use crate::inventory::Record;

use super::{DELIMITER, FIELD_COUNT};

/// Why a line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineErrorKind {
    #[error("expected 5 fields, found {found}")]
    FieldCount { found: usize },

    #[error("id is not an integer")]
    InvalidId,

    #[error("price is not a number")]
    InvalidPrice,

    #[error("quantity is not an integer")]
    InvalidQuantity,
}

/// A rejected input line
#[derive(Debug, Clone, PartialEq)]
pub struct LineError {
    /// 1-based line number in the source
    pub line_number: usize,

    /// The offending line, verbatim
    pub content: String,

    /// Why it was rejected
    pub kind: LineErrorKind,
}

/// Outcome of a decode pass
///
/// Decoding never fails outright; everything that went wrong on the way
/// is collected here for the caller to log or inspect.
#[derive(Debug, Default)]
pub struct DecodeReport {
    /// Total lines seen, well-formed or not
    pub lines_seen: usize,

    /// Lines that were skipped, in source order
    pub errors: Vec<LineError>,

    /// Set when the source file does not exist
    pub source_missing: bool,

    /// Set when reading failed partway through
    pub io_failure: Option<String>,
}

impl DecodeReport {
    /// Number of skipped lines
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// True when every line decoded and the source was readable
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && !self.source_missing && self.io_failure.is_none()
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Parse one line into a record
///
/// Splits on the delimiter into exactly five fields: id, brand, category,
/// price, quantity. Fields beyond the fifth are ignored. Brand and
/// category are taken verbatim, with no trim or empty check.
pub fn parse_line(line: &str) -> std::result::Result<Record, LineErrorKind> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < FIELD_COUNT {
        return Err(LineErrorKind::FieldCount {
            found: fields.len(),
        });
    }

    let id = fields[0]
        .parse::<u32>()
        .map_err(|_| LineErrorKind::InvalidId)?;
    let price = fields[3]
        .parse::<f64>()
        .map_err(|_| LineErrorKind::InvalidPrice)?;
    let quantity = fields[4]
        .parse::<i64>()
        .map_err(|_| LineErrorKind::InvalidQuantity)?;

    Ok(Record {
        id,
        brand: fields[1].to_string(),
        category: fields[2].to_string(),
        price,
        quantity,
    })
}

/// Decode records from a source, line by line
///
/// Malformed lines are recorded on the report and skipped; the pass
/// continues. A read failure partway through stops the pass and yields
/// the records parsed before it.
pub fn decode<R: BufRead>(reader: R) -> (Vec<Record>, DecodeReport) {
    let mut records = Vec::new();
    let mut report = DecodeReport::default();

    for (number, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                report.io_failure = Some(err.to_string());
                break;
            }
        };
        report.lines_seen += 1;

        match parse_line(&line) {
            Ok(record) => records.push(record),
            Err(kind) => report.errors.push(LineError {
                line_number: number + 1,
                content: line,
                kind,
            }),
        }
    }

    (records, report)
}

/// Load records from a file
///
/// A missing file yields an empty sequence with `source_missing` set on
/// the report; any other open failure is recorded as `io_failure`.
pub fn load(path: &Path) -> (Vec<Record>, DecodeReport) {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            let report = DecodeReport {
                source_missing: true,
                ..DecodeReport::default()
            };
            return (Vec::new(), report);
        }
        Err(err) => {
            let report = DecodeReport {
                io_failure: Some(err.to_string()),
                ..DecodeReport::default()
            };
            return (Vec::new(), report);
        }
    };

    decode(BufReader::new(file))
}
