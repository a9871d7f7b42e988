//! Minimum-description-length search for hyperintervals of anomalously high density
//!
//! A hyperinterval is kept when describing the records inside it with one
//! uniform density and the records outside with another is cheaper than a
//! single uniform density over the whole database, by more than the cost of
//! specifying the hyperinterval itself.

#![forbid(unsafe_code)]

/// Seeding, growth, complexity evaluation, pruning and the search loop
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Code lengths and entropies
pub mod math;
/// Distance and volume over records
pub mod measure;
/// Records and hyperintervals
pub mod spatial;

pub use io::error::{HintError, Result};
