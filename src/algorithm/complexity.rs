//! Two-part MDL description length of a hyperinterval partition
//!
//! Points inside a candidate are encoded under a uniform density over the
//! candidate, points outside under a uniform density over the rest of the
//! database region. Lower values mean the partition explains the data better
//! than one global uniform density.

use std::f64::consts::LN_2;

use crate::math::description::{log_complement, uniform_code_length};
use crate::measure::Measure;
use crate::spatial::{Database, Hyperinterval};

/// Outcome of evaluating one candidate hyperinterval
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    /// Comparative description length in nats
    pub complexity: f64,
    /// Number of database records covered
    pub inside_count: usize,
    /// Log-volume of the candidate under the measure
    pub log_volume: f64,
}

/// Computes the comparative description length of candidate regions
pub struct ComplexityEvaluator<'a, M: Measure + ?Sized> {
    database: &'a Database,
    measure: &'a M,
    log_db_volume: f64,
}

impl<'a, M: Measure + ?Sized> ComplexityEvaluator<'a, M> {
    /// Evaluator for an initialized measure and the database's log-volume
    pub const fn new(database: &'a Database, measure: &'a M, log_db_volume: f64) -> Self {
        Self {
            database,
            measure,
            log_db_volume,
        }
    }

    /// Database the evaluator counts coverage in
    pub const fn database(&self) -> &'a Database {
        self.database
    }

    /// Measure the evaluator takes volumes with
    pub const fn measure(&self) -> &'a M {
        self.measure
    }

    /// Description length of the partition induced by `hint`
    ///
    /// Returns `None` for degenerate candidates: no covered record, or
    /// records left outside a candidate that already fills the database region.
    pub fn evaluate(&self, hint: &Hyperinterval) -> Option<Evaluation> {
        let inside_count = self.database.covered_count(hint);
        if inside_count == 0 {
            return None;
        }
        let outside_count = self.database.len() - inside_count;
        let log_volume = self.measure.log_volume(hint.lower(), hint.upper());

        let mut complexity = uniform_code_length(inside_count, log_volume);
        if outside_count != 0 {
            let log_outside = log_complement(self.log_db_volume, log_volume)?;
            complexity += uniform_code_length(outside_count, log_outside);
        }

        complexity.is_finite().then_some(Evaluation {
            complexity,
            inside_count,
            log_volume,
        })
    }
}

/// Reference description lengths computed once per run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Baseline {
    /// `N ln V`: all records under one uniform density, without the count term
    pub data_complexity: f64,
    /// `N (ln V - ln N)`: comparative cost of the single uniform model
    pub base_complexity: f64,
    /// Cost of specifying the two boundary points of every dimension
    pub model_complexity: f64,
    /// Dimensionality the model cost was computed for
    pub dims: usize,
}

impl Baseline {
    /// Baseline for `records` records in a region of log-volume `log_db_volume`
    ///
    /// The model cost charges the discretization constant once per boundary
    /// point plus `ln 2` per dimension.
    pub fn new(records: usize, dims: usize, log_db_volume: f64, discretization: f64) -> Self {
        Self {
            data_complexity: records as f64 * log_db_volume,
            base_complexity: uniform_code_length(records, log_db_volume),
            model_complexity: 2.0f64.mul_add(discretization, dims as f64 * LN_2),
            dims,
        }
    }

    /// Model cost scaled to the number of dimensions still constraining a pattern
    pub const fn model_complexity_for(&self, constrained: usize) -> f64 {
        if self.dims == 0 {
            return 0.0;
        }
        self.model_complexity * constrained as f64 / self.dims as f64
    }

    /// Per-dimension share of the model cost, the budget for one pruning step
    pub const fn dimension_budget(&self) -> f64 {
        self.model_complexity_for(1)
    }

    /// Whether a pattern with `constrained` dimensions beats the single uniform model
    pub const fn keeps(&self, complexity: f64, constrained: usize) -> bool {
        complexity < self.base_complexity - self.model_complexity_for(constrained)
    }

    /// Reference complexity: the single uniform model plus one model cost
    pub const fn reference_complexity(&self) -> f64 {
        self.base_complexity + self.model_complexity
    }
}
