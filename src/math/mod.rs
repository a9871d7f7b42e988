//! Mathematical utilities for description lengths

/// Code lengths of uniform densities over regions
pub mod description;
/// Entropy of binary columns
pub mod entropy;
