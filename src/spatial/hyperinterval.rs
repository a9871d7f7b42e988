//! Axis-aligned hyperrectangles with inclusive bounds and pruned dimensions
//!
//! Every mutation produces a new value so that a candidate can be evaluated
//! before the accepted region is replaced.

use bitvec::prelude::*;
use std::fmt;

use crate::io::error::{Result, invalid_parameter};

/// Pair of bound vectors `(lower, upper)` with `lower[i] <= upper[i]`
///
/// Dimensions marked full impose no constraint beyond the database's own
/// bound in that dimension; they are the result of dimension pruning.
#[derive(Clone, Debug, PartialEq)]
pub struct Hyperinterval {
    lower: Vec<f64>,
    upper: Vec<f64>,
    full: BitVec,
}

impl Hyperinterval {
    /// Create a hyperinterval from explicit bounds
    ///
    /// # Errors
    ///
    /// Returns an error if the bound vectors differ in length, are empty, or
    /// if some `lower[i] > upper[i]` (NaN bounds are rejected the same way)
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if lower.len() != upper.len() {
            return Err(invalid_parameter(
                "bounds",
                &format!("{} vs {}", lower.len(), upper.len()),
                &"lower and upper bounds must have the same dimensionality",
            ));
        }
        if lower.is_empty() {
            return Err(invalid_parameter(
                "bounds",
                &0,
                &"a hyperinterval needs at least one dimension",
            ));
        }
        if let Some(dim) = lower
            .iter()
            .zip(&upper)
            .position(|(lo, hi)| lo.is_nan() || hi.is_nan() || lo > hi)
        {
            return Err(invalid_parameter(
                "bounds",
                &dim,
                &"lower bound exceeds upper bound",
            ));
        }

        let full = bitvec![0; lower.len()];
        Ok(Self { lower, upper, full })
    }

    /// Wrap bounds already known to satisfy `lower[i] <= upper[i]`
    pub(crate) fn from_valid_bounds(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        let full = bitvec![0; lower.len()];
        Self { lower, upper, full }
    }

    /// The smallest hyperinterval covering two records
    pub fn bounding(a: &[f64], b: &[f64]) -> Self {
        let lower: Vec<f64> = a.iter().zip(b).map(|(x, y)| x.min(*y)).collect();
        let upper: Vec<f64> = a.iter().zip(b).map(|(x, y)| x.max(*y)).collect();
        let full = bitvec![0; lower.len()];
        Self { lower, upper, full }
    }

    /// A degenerate hyperinterval covering exactly one point
    pub fn from_point(point: &[f64]) -> Self {
        Self::bounding(point, point)
    }

    /// Number of dimensions
    pub const fn dims(&self) -> usize {
        self.lower.len()
    }

    /// Lower bound vector
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper bound vector
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Whether every dimension satisfies `lower[i] <= record[i] <= upper[i]`
    pub fn covers(&self, record: &[f64]) -> bool {
        record.len() == self.dims()
            && record
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(x, (lo, hi))| lo <= x && x <= hi)
    }

    /// Whether any of the given hyperintervals covers the record
    pub fn any_covers(hints: &[Self], record: &[f64]) -> bool {
        hints.iter().any(|hint| hint.covers(record))
    }

    /// Componentwise min/max of the current bounds and a record
    #[must_use]
    pub fn extended_to(&self, record: &[f64]) -> Self {
        let lower = self.lower.iter().zip(record).map(|(lo, x)| lo.min(*x)).collect();
        let upper = self.upper.iter().zip(record).map(|(hi, x)| hi.max(*x)).collect();
        Self {
            lower,
            upper,
            full: self.full.clone(),
        }
    }

    /// Replace one dimension by the corresponding bound of `bounds` and mark it full
    ///
    /// Returns an unchanged copy if `dim` is out of range.
    #[must_use]
    pub fn widened(&self, dim: usize, bounds: &Self) -> Self {
        let mut result = self.clone();
        if let (Some(lo), Some(hi), Some(full_lo), Some(full_hi)) = (
            result.lower.get_mut(dim),
            result.upper.get_mut(dim),
            bounds.lower.get(dim),
            bounds.upper.get(dim),
        ) {
            *lo = lo.min(*full_lo);
            *hi = hi.max(*full_hi);
            result.full.set(dim, true);
        }
        result
    }

    /// Whether a dimension has been pruned
    pub fn is_full(&self, dim: usize) -> bool {
        self.full.get(dim).as_deref() == Some(&true)
    }

    /// Number of pruned dimensions
    pub fn full_count(&self) -> usize {
        self.full.count_ones()
    }

    /// Number of dimensions still constraining the pattern
    pub fn constrained_count(&self) -> usize {
        self.dims() - self.full_count()
    }

    /// Whether `self` contains `other` componentwise
    pub fn dominates(&self, other: &Self) -> bool {
        self.dims() == other.dims()
            && self.lower.iter().zip(&other.lower).all(|(a, b)| a <= b)
            && self.upper.iter().zip(&other.upper).all(|(a, b)| a >= b)
    }

    /// Midpoint of every dimension
    pub fn centre(&self) -> Vec<f64> {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(lo, hi)| lo + (hi - lo) / 2.0)
            .collect()
    }

    /// Half the extent of every dimension
    pub fn half_extent(&self) -> Vec<f64> {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(lo, hi)| (hi - lo) / 2.0)
            .collect()
    }
}

impl fmt::Display for Hyperinterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (dim, (lo, hi)) in self.lower.iter().zip(&self.upper).enumerate() {
            if dim > 0 {
                write!(f, ", ")?;
            }
            if self.is_full(dim) {
                write!(f, "*")?;
            } else {
                write!(f, "{lo}..{hi}")?;
            }
        }
        write!(f, "]")
    }
}
