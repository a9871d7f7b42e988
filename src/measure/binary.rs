//! Counting measure on binary columns
//!
//! Columns hold 0/1 indicators (one-hot categories, bag-of-words presence).
//! An unconstrained column doubles the volume because it admits both values.

use bitvec::prelude::*;
use std::f64::consts::LN_2;
use std::ops::Range;

use crate::io::configuration::BINARY_DISCRETIZATION_PER_COLUMN;
use crate::io::error::{Result, invalid_data, invalid_parameter};
use crate::math::entropy::binary_column_entropy;
use crate::measure::Measure;
use crate::spatial::{Database, Hyperinterval};

/// Entropy-weighted Hamming distance with volume `2^(differing columns)`
#[derive(Clone, Debug, Default)]
pub struct BinaryMeasure {
    requested: Option<Range<usize>>,
    span: Range<usize>,
    weights: Vec<f64>,
    constant: BitVec,
    discretization: f64,
}

impl BinaryMeasure {
    /// Measure over all columns of the database
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure restricted to a contiguous block of columns
    pub(crate) fn over_columns(columns: Range<usize>) -> Self {
        Self {
            requested: Some(columns),
            ..Self::default()
        }
    }

    /// Per-column distance weights (bit entropy) established by `initialize`
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    fn pairs<'a>(&'a self, a: &'a [f64], b: &'a [f64]) -> impl Iterator<Item = (f64, f64)> + 'a {
        let a = a.get(self.span.clone()).unwrap_or_default();
        let b = b.get(self.span.clone()).unwrap_or_default();
        a.iter().copied().zip(b.iter().copied())
    }

    /// Establish entropy weights over the given database without producing bounds
    pub(crate) fn prepare(&mut self, database: &Database) -> Result<()> {
        let dims = database.dims();
        let span = self.requested.clone().unwrap_or(0..dims);
        if span.end > dims || span.start > span.end {
            return Err(invalid_parameter(
                "numeric_columns",
                &span.start,
                &format!("database has only {dims} columns"),
            ));
        }

        for (row, record) in database.records().enumerate() {
            let values = record.get(span.clone()).unwrap_or_default();
            if let Some(offset) = values.iter().position(|&x| x != 0.0 && x != 1.0) {
                return Err(invalid_data(&format!(
                    "record {row} column {} is not binary",
                    span.start + offset
                )));
            }
        }

        let total = database.len();
        let ones = database.column_ones();
        let ones = ones.get(span.clone()).unwrap_or_default();
        self.weights = ones
            .iter()
            .map(|&n| binary_column_entropy(n, total))
            .collect();
        self.constant = ones.iter().map(|&n| n == 0 || n == total).collect();
        self.discretization = span.len() as f64 * BINARY_DISCRETIZATION_PER_COLUMN;
        self.span = span;
        Ok(())
    }

    /// Log-volume contribution of the measured columns
    pub(crate) fn log_volume_part(&self, a: &[f64], b: &[f64]) -> f64 {
        let differing = self.pairs(a, b).filter(|(x, y)| x != y).count();
        differing as f64 * LN_2
    }
}

impl Measure for BinaryMeasure {
    fn initialize(&mut self, database: &Database) -> Result<Hyperinterval> {
        self.prepare(database)?;
        Ok(database.bounds())
    }

    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        self.pairs(a, b)
            .zip(&self.weights)
            .filter(|((x, y), _)| x != y)
            .map(|(_, weight)| weight)
            .sum()
    }

    fn log_volume(&self, a: &[f64], b: &[f64]) -> f64 {
        if std::ptr::eq(a, b) {
            return f64::NEG_INFINITY;
        }
        self.log_volume_part(a, b)
    }

    fn fullness(&self, hint: &Hyperinterval) -> Vec<f64> {
        self.pairs(hint.lower(), hint.upper())
            .zip(self.constant.iter().by_vals())
            .map(|((x, y), constant)| if x != y || constant { 1.0 } else { 0.0 })
            .collect()
    }

    fn discretization(&self) -> f64 {
        self.discretization
    }
}
