//! World population data model: an on-disk CSV turned into a JSON-friendly
//! document. Row 0 of the file names the columns; data rows keep columns 0
//! and 1 as label strings and coerce everything after to integers.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

pub mod transform;

/// JSON object mapping synthetic keys "k0", "k1", ... to the header labels,
/// in column order. Relies on serde_json's preserve_order feature so the
/// serialized key order matches insertion order.
pub type ColumnNameMap = Map<String, Value>;

/// One data row keyed the same way as the header map. "k0" and "k1" hold raw
/// strings, every later key holds an integer.
pub type DataRow = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldDataDocument {
    pub column_names: ColumnNameMap,
    pub data_rows: Vec<DataRow>,
}

/// Outcome of a transform attempt. `Unavailable` renders as the literal `{}`
/// sentinel on the wire and stays distinct from a document whose row list is
/// empty, so callers can tell "no source" apart from "source with no rows".
#[derive(Debug, Clone, PartialEq)]
pub enum WorldDataOutcome {
    Unavailable(UnavailableReason),
    Document(WorldDataDocument),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// The source file is missing or could not be opened.
    FileUnreadable,
    /// The file opened but contained no header row.
    NoHeader,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileUnreadable => write!(f, "source file missing or unreadable"),
            Self::NoHeader => write!(f, "source file has no header row"),
        }
    }
}

#[derive(Debug)]
pub enum TransformError {
    /// A data row's width differs from the header width. Reported instead of
    /// silently truncating or padding the row.
    RowWidthMismatch {
        line: u64,
        expected: usize,
        found: usize,
    },
    /// The header has fewer columns than the two mandated label columns.
    HeaderTooNarrow { found: usize },
    Csv(csv::Error),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowWidthMismatch {
                line,
                expected,
                found,
            } => write!(
                f,
                "row width mismatch at line {line}: header has {expected} columns, row has {found}"
            ),
            Self::HeaderTooNarrow { found } => write!(
                f,
                "header has {found} column(s), need at least 2 label columns"
            ),
            Self::Csv(err) => write!(f, "failed to parse CSV: {err}"),
        }
    }
}

impl std::error::Error for TransformError {}

impl From<csv::Error> for TransformError {
    fn from(err: csv::Error) -> Self {
        if let csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } = err.kind()
        {
            return Self::RowWidthMismatch {
                line: pos.as_ref().map_or(0, csv::Position::line),
                expected: *expected_len as usize,
                found: *len as usize,
            };
        }
        Self::Csv(err)
    }
}
