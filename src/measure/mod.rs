//! Pluggable notions of distance and volume over database records
//!
//! The search engine only talks to [`Measure`]; the variants below differ in
//! the formulas behind the trait methods and nothing else.

use std::fmt;

use crate::io::error::Result;
use crate::spatial::{Database, Hyperinterval};

/// Entropy-weighted Hamming distance and counting volume on 0/1 columns
pub mod binary;
/// Normalized rectilinear distance and volume on numeric columns
pub mod continuous;
/// Numeric leading columns combined with binary trailing columns
pub mod mixed;

pub use binary::BinaryMeasure;
pub use continuous::ContinuousMeasure;
pub use mixed::MixedMeasure;

/// Distance, volume and fullness over the records of one database
///
/// `initialize` must run before any other method; it establishes the
/// per-database constants the other methods read.
pub trait Measure {
    /// Compute normalization state and return the database's bounding hyperinterval
    ///
    /// # Errors
    ///
    /// Returns an error if the database does not suit the measure (for example
    /// non-binary values in a binary column)
    fn initialize(&mut self, database: &Database) -> Result<Hyperinterval>;

    /// Symmetric non-negative distance between two records
    fn distance(&self, a: &[f64], b: &[f64]) -> f64;

    /// Natural logarithm of the volume between two corners
    ///
    /// Passing the same slice as both corners yields `-inf`: a record with
    /// itself spans no volume, while two equal but distinct records span the
    /// minimal positive volume.
    fn log_volume(&self, a: &[f64], b: &[f64]) -> f64;

    /// Volume between two corners
    fn volume(&self, a: &[f64], b: &[f64]) -> f64 {
        self.log_volume(a, b).exp()
    }

    /// Per-dimension share of the database range a hyperinterval spans
    ///
    /// 0 means fully discriminating, 1 means no constraint at all.
    fn fullness(&self, hint: &Hyperinterval) -> Vec<f64>;

    /// Precision constant used by the model cost of one hyperinterval
    fn discretization(&self) -> f64;
}

impl<M: Measure + ?Sized> Measure for Box<M> {
    fn initialize(&mut self, database: &Database) -> Result<Hyperinterval> {
        (**self).initialize(database)
    }

    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        (**self).distance(a, b)
    }

    fn log_volume(&self, a: &[f64], b: &[f64]) -> f64 {
        (**self).log_volume(a, b)
    }

    fn volume(&self, a: &[f64], b: &[f64]) -> f64 {
        (**self).volume(a, b)
    }

    fn fullness(&self, hint: &Hyperinterval) -> Vec<f64> {
        (**self).fullness(hint)
    }

    fn discretization(&self) -> f64 {
        (**self).discretization()
    }
}

/// Runtime selection of a measure variant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureKind {
    /// All columns numeric
    Continuous,
    /// All columns 0/1
    Binary,
    /// The given number of leading numeric columns, the rest 0/1
    Mixed {
        /// Count of leading numeric columns
        numeric_columns: usize,
    },
}

impl MeasureKind {
    /// Instantiate the selected measure
    pub fn build(self) -> Box<dyn Measure> {
        match self {
            Self::Continuous => Box::new(ContinuousMeasure::new()),
            Self::Binary => Box::new(BinaryMeasure::new()),
            Self::Mixed { numeric_columns } => Box::new(MixedMeasure::new(numeric_columns)),
        }
    }
}

impl fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continuous => write!(f, "continuous"),
            Self::Binary => write!(f, "binary"),
            Self::Mixed { numeric_columns } => {
                write!(f, "mixed ({numeric_columns} numeric columns)")
            }
        }
    }
}
