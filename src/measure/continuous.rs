//! Normalized rectilinear measure for numeric columns
//!
//! Every column is scaled by its database range so that the bounding box of
//! the database has volume 1 and distances are comparable across columns.
//! Every side is at least `epsilon` thick, chosen so that a hyperinterval
//! degenerate in every numeric column has volume `f64::EPSILON`.

use std::ops::Range;

use crate::io::error::{Result, invalid_parameter};
use crate::measure::Measure;
use crate::spatial::{Database, Hyperinterval};

/// Rectilinear (L1) distance and box volume in normalized space
#[derive(Clone, Debug, Default)]
pub struct ContinuousMeasure {
    requested: Option<Range<usize>>,
    span: Range<usize>,
    range: Vec<f64>,
    scale: Vec<f64>,
    log_epsilon: f64,
    discretization: f64,
}

impl ContinuousMeasure {
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

    /// Per-column normalization factors established by `initialize`
    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    /// Minimum thickness of a degenerate side, in normalized units
    pub fn epsilon(&self) -> f64 {
        self.log_epsilon.exp()
    }

    /// Normalized side lengths over the measured columns
    fn sides<'a>(&'a self, a: &'a [f64], b: &'a [f64]) -> impl Iterator<Item = f64> + 'a {
        let a = a.get(self.span.clone()).unwrap_or_default();
        let b = b.get(self.span.clone()).unwrap_or_default();
        a.iter()
            .zip(b)
            .zip(&self.scale)
            .map(|((x, y), scale)| ((x - y) / scale).abs())
    }

    /// Establish scales over the given database without producing bounds
    pub(crate) fn prepare(&mut self, database: &Database) -> Result<()> {
        let dims = database.dims();
        let span = self.requested.clone().unwrap_or(0..dims);
        if span.end > dims || span.start > span.end {
            return Err(invalid_parameter(
                "numeric_columns",
                &span.end,
                &format!("database has only {dims} columns"),
            ));
        }

        let bounds = database.bounds();
        let lower = bounds.lower().get(span.clone()).unwrap_or_default();
        let upper = bounds.upper().get(span.clone()).unwrap_or_default();
        self.range = lower.iter().zip(upper).map(|(lo, hi)| hi - lo).collect();
        // A constant column has every side degenerate; unit scale keeps that finite
        self.scale = self
            .range
            .iter()
            .map(|&range| if range > 0.0 { range } else { 1.0 })
            .collect();

        let numeric = span.len();
        self.log_epsilon = if numeric == 0 {
            0.0
        } else {
            f64::EPSILON.ln() / numeric as f64
        };
        self.discretization = numeric as f64 * (database.len() as f64).ln();
        self.span = span;
        Ok(())
    }

    /// Log-volume contribution of the measured columns, without floor
    pub(crate) fn log_volume_part(&self, a: &[f64], b: &[f64]) -> f64 {
        // ln 0 is -inf, so zero-width sides take the epsilon floor too
        self.sides(a, b).map(|side| side.ln().max(self.log_epsilon)).sum()
    }
}

impl Measure for ContinuousMeasure {
    fn initialize(&mut self, database: &Database) -> Result<Hyperinterval> {
        self.prepare(database)?;
        Ok(database.bounds())
    }

    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        self.sides(a, b).sum()
    }

    fn log_volume(&self, a: &[f64], b: &[f64]) -> f64 {
        if std::ptr::eq(a, b) {
            return f64::NEG_INFINITY;
        }
        self.log_volume_part(a, b).max(f64::MIN_POSITIVE.ln())
    }

    fn fullness(&self, hint: &Hyperinterval) -> Vec<f64> {
        self.sides(hint.lower(), hint.upper())
            .zip(&self.range)
            .map(|(side, &range)| if range > 0.0 { side.min(1.0) } else { 1.0 })
            .collect()
    }

    fn discretization(&self) -> f64 {
        self.discretization
    }
}
