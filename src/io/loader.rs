//! Text database readers
//!
//! Dense files hold one record per line with whitespace-separated numbers.
//! Sparse files hold one record per line listing the zero-based indices of
//! the columns that are 1; they expand to dense binary records.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::io::error::{HintError, Result, WithContext, invalid_parameter, parse_error};
use crate::spatial::Database;

/// Layout of a database file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatabaseFormat {
    /// Whitespace-separated values, one record per line
    Dense,
    /// Indices of set columns, one record per line
    Sparse {
        /// Width of the expanded binary records
        columns: usize,
    },
}

/// Read a database file in the given format
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, a line is
/// malformed, or the records do not form a valid database
pub fn load(path: &Path, format: DatabaseFormat) -> Result<Database> {
    let file = File::open(path).map_err(|e| HintError::FileSystem {
        path: path.to_path_buf(),
        operation: "open database",
        source: e,
    })?;
    let reader = BufReader::new(file);
    let database = match format {
        DatabaseFormat::Dense => parse_dense(reader),
        DatabaseFormat::Sparse { columns } => parse_sparse(reader, columns),
    }
    .with_path(path)?;
    log::info!(
        "loaded {} records with {} columns from '{}'",
        database.len(),
        database.dims(),
        path.display()
    );
    Ok(database)
}

/// Parse dense records; blank lines are skipped
///
/// # Errors
///
/// Returns an error if reading fails, a value is not a number, or records
/// differ in length
pub fn parse_dense<R: BufRead>(reader: R) -> Result<Database> {
    let mut rows = Vec::new();
    let mut width = None;

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = number + 1;
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|e| parse_error(line_number, &format!("'{token}': {e}")))
                    .and_then(|value| {
                        if value.is_nan() {
                            Err(parse_error(line_number, &"NaN is not a valid value"))
                        } else {
                            Ok(value)
                        }
                    })
            })
            .collect::<Result<Vec<f64>>>()?;

        match width {
            None => width = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(parse_error(
                    line_number,
                    &format!("expected {expected} values, found {}", row.len()),
                ));
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    Database::from_rows(rows)
}

/// Parse sparse records into dense binary records of `columns` columns
///
/// An empty line is a record with no column set.
///
/// # Errors
///
/// Returns an error if reading fails, `columns` is zero, or an index is not
/// a non-negative integer below `columns`
pub fn parse_sparse<R: BufRead>(reader: R, columns: usize) -> Result<Database> {
    if columns == 0 {
        return Err(invalid_parameter(
            "sparse_columns",
            &columns,
            &"sparse records need at least one column",
        ));
    }

    let mut rows = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = number + 1;
        let mut row = vec![0.0; columns];
        for token in line.split_whitespace() {
            let index = token
                .parse::<usize>()
                .map_err(|e| parse_error(line_number, &format!("'{token}': {e}")))?;
            let slot = row.get_mut(index).ok_or_else(|| {
                parse_error(
                    line_number,
                    &format!("column {index} out of range for {columns} columns"),
                )
            })?;
            *slot = 1.0;
        }
        rows.push(row);
    }

    Database::from_rows(rows)
}
