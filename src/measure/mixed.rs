//! General purpose measure combined with a counting measure
//!
//! The leading `numeric_columns` columns are measured like
//! [`ContinuousMeasure`], the remaining ones like [`BinaryMeasure`].
//! Distances and log-volumes add, fullness vectors concatenate.

use crate::io::error::{Result, invalid_parameter};
use crate::measure::{BinaryMeasure, ContinuousMeasure, Measure};
use crate::spatial::{Database, Hyperinterval};

/// Numeric leading columns followed by binary columns
#[derive(Clone, Debug)]
pub struct MixedMeasure {
    numeric_columns: usize,
    continuous: ContinuousMeasure,
    binary: BinaryMeasure,
}

impl MixedMeasure {
    /// Measure with the given number of leading numeric columns
    pub fn new(numeric_columns: usize) -> Self {
        Self {
            numeric_columns,
            continuous: ContinuousMeasure::over_columns(0..numeric_columns),
            binary: BinaryMeasure::new(),
        }
    }

    /// Count of leading numeric columns
    pub const fn numeric_columns(&self) -> usize {
        self.numeric_columns
    }
}

impl Measure for MixedMeasure {
    fn initialize(&mut self, database: &Database) -> Result<Hyperinterval> {
        let dims = database.dims();
        if self.numeric_columns > dims {
            return Err(invalid_parameter(
                "numeric_columns",
                &self.numeric_columns,
                &format!("database has only {dims} columns"),
            ));
        }
        self.binary = BinaryMeasure::over_columns(self.numeric_columns..dims);
        self.continuous.prepare(database)?;
        self.binary.prepare(database)?;
        Ok(database.bounds())
    }

    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        self.continuous.distance(a, b) + self.binary.distance(a, b)
    }

    fn log_volume(&self, a: &[f64], b: &[f64]) -> f64 {
        if std::ptr::eq(a, b) {
            return f64::NEG_INFINITY;
        }
        let log_volume =
            self.continuous.log_volume_part(a, b) + self.binary.log_volume_part(a, b);
        log_volume.max(f64::MIN_POSITIVE.ln())
    }

    fn fullness(&self, hint: &Hyperinterval) -> Vec<f64> {
        let mut fullness = self.continuous.fullness(hint);
        fullness.extend(self.binary.fullness(hint));
        fullness
    }

    fn discretization(&self) -> f64 {
        self.continuous.discretization() + self.binary.discretization()
    }
}
