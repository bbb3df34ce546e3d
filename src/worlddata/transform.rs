//! CSV-to-JSON transformation. Invoked fresh on each request; the file handle
//! is scoped to the call and released on every exit path.

use std::fs::File;
use std::path::Path;

use serde_json::Value;

use super::{
    ColumnNameMap, DataRow, TransformError, UnavailableReason, WorldDataDocument, WorldDataOutcome,
};

/// Leading columns kept as raw strings (country/region name and code).
const LABEL_COLUMNS: usize = 2;

/// Read the CSV at `path` and build a [`WorldDataDocument`].
///
/// A file that cannot be opened or carries no header row yields the
/// `Unavailable` outcome rather than an error; the caller renders that as the
/// `{}` sentinel. A data row whose width differs from the header width fails
/// the whole transform (the csv reader's strict length checking surfaces it
/// as [`TransformError::RowWidthMismatch`]).
pub fn transform_csv_file(path: &Path) -> Result<WorldDataOutcome, TransformError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Ok(WorldDataOutcome::Unavailable(
                UnavailableReason::FileUnreadable,
            ))
        }
    };

    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Ok(WorldDataOutcome::Unavailable(UnavailableReason::NoHeader));
    }
    if headers.len() < LABEL_COLUMNS {
        return Err(TransformError::HeaderTooNarrow {
            found: headers.len(),
        });
    }

    let mut column_names = ColumnNameMap::new();
    for (index, label) in headers.iter().enumerate() {
        column_names.insert(key_for(index), Value::from(label));
    }

    let mut data_rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = DataRow::new();
        for (index, cell) in record.iter().enumerate() {
            let value = if index < LABEL_COLUMNS {
                Value::from(cell)
            } else {
                Value::from(coerce_numeric(cell))
            };
            row.insert(key_for(index), value);
        }
        data_rows.push(row);
    }

    Ok(WorldDataOutcome::Document(WorldDataDocument {
        column_names,
        data_rows,
    }))
}

fn key_for(index: usize) -> String {
    format!("k{index}")
}

/// Best-effort integer coercion for population cells: parse as a float and
/// truncate toward zero, fall back to a direct integer parse, default to 0.
/// Never fails. Non-finite floats ("inf", "NaN") are not meaningful
/// population values and default to 0 as well.
pub fn coerce_numeric(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        if value.is_finite() {
            return value as i64;
        }
    }
    trimmed.parse::<i64>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::coerce_numeric;

    #[test]
    fn float_cells_truncate_toward_zero() {
        assert_eq!(coerce_numeric("123.7"), 123);
        assert_eq!(coerce_numeric("10694.0"), 10694);
        assert_eq!(coerce_numeric("-3.9"), -3);
    }

    #[test]
    fn integer_cells_pass_through() {
        assert_eq!(coerce_numeric("500"), 500);
        assert_eq!(coerce_numeric(" 20779 "), 20779);
    }

    #[test]
    fn malformed_and_empty_cells_default_to_zero() {
        assert_eq!(coerce_numeric(""), 0);
        assert_eq!(coerce_numeric("N/A"), 0);
        assert_eq!(coerce_numeric("12,345"), 0);
    }

    #[test]
    fn non_finite_floats_default_to_zero() {
        assert_eq!(coerce_numeric("inf"), 0);
        assert_eq!(coerce_numeric("NaN"), 0);
    }
}
