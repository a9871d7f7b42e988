//! Immutable record table with coverage queries

use bitvec::prelude::*;
use ndarray::{Array2, Axis};

use crate::io::error::{Result, invalid_data};
use crate::spatial::hyperinterval::Hyperinterval;

/// Ordered sequence of `N` records sharing dimensionality `D`
///
/// Stored row-major so that every record is available as a contiguous slice.
#[derive(Clone, Debug)]
pub struct Database {
    records: Array2<f64>,
}

impl Database {
    /// Build a database from owned records
    ///
    /// # Errors
    ///
    /// Returns an error if there are no records, records have no columns,
    /// record lengths differ, or a value is NaN
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let dims = rows
            .first()
            .map(Vec::len)
            .ok_or_else(|| invalid_data(&"database contains no records"))?;
        if let Some(row) = rows.iter().position(|row| row.len() != dims) {
            return Err(invalid_data(&format!(
                "record {row} has a different number of columns than record 0 ({dims})"
            )));
        }

        let count = rows.len();
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let records = Array2::from_shape_vec((count, dims), flat)
            .map_err(|e| invalid_data(&format!("cannot shape records: {e}")))?;
        Self::from_array(records)
    }

    /// Build a database from a matrix of records
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is empty in either axis or contains NaN
    pub fn from_array(records: Array2<f64>) -> Result<Self> {
        if records.nrows() == 0 || records.ncols() == 0 {
            return Err(invalid_data(&"database must have at least one record and column"));
        }
        if records.iter().any(|value| value.is_nan()) {
            return Err(invalid_data(&"database contains NaN values"));
        }
        // Slice access to records relies on row-major layout
        let records = if records.is_standard_layout() {
            records
        } else {
            records.as_standard_layout().into_owned()
        };
        Ok(Self { records })
    }

    /// Number of records `N`
    pub fn len(&self) -> usize {
        self.records.nrows()
    }

    /// Always false for a constructed database
    pub fn is_empty(&self) -> bool {
        self.records.nrows() == 0
    }

    /// Number of columns `D`
    pub fn dims(&self) -> usize {
        self.records.ncols()
    }

    /// Record by index
    pub fn record(&self, index: usize) -> Option<&[f64]> {
        if index >= self.len() {
            return None;
        }
        self.records.row(index).to_slice()
    }

    /// All records in order
    pub fn records(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.records.outer_iter().filter_map(|row| row.to_slice())
    }

    /// The database's own bounding hyperinterval (per-column min and max)
    pub fn bounds(&self) -> Hyperinterval {
        let (lower, upper): (Vec<f64>, Vec<f64>) = self
            .records
            .axis_iter(Axis(1))
            .map(|column| {
                column.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                    (lo.min(x), hi.max(x))
                })
            })
            .unzip();
        Hyperinterval::from_valid_bounds(lower, upper)
    }

    /// Number of ones per column, treating any nonzero value as one
    pub fn column_ones(&self) -> Vec<usize> {
        self.records
            .axis_iter(Axis(1))
            .map(|column| column.iter().filter(|&&x| x != 0.0).count())
            .collect()
    }

    /// Number of records covered by the hyperinterval (inclusive bounds)
    pub fn covered_count(&self, hint: &Hyperinterval) -> usize {
        self.records().filter(|record| hint.covers(record)).count()
    }

    /// Per-record membership flags for the hyperinterval
    pub fn coverage(&self, hint: &Hyperinterval) -> BitVec {
        self.records().map(|record| hint.covers(record)).collect()
    }
}
