//! Data entities the search operates on
//!
//! This module contains:
//! - The immutable record table and its coverage queries
//! - Hyperintervals, the axis-aligned patterns being searched for

/// Record table with per-column bounds and coverage counting
pub mod database;
/// Axis-aligned hyperrectangles with inclusive bounds
pub mod hyperinterval;

pub use database::Database;
pub use hyperinterval::Hyperinterval;
