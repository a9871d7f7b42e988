//! Input/output: command line, files, reports and error handling

/// Command-line arguments and the search driver
pub mod cli;
/// Constants and defaults shared across the crate
pub mod configuration;
/// Error type and result alias
pub mod error;
/// Dense and sparse database readers
pub mod loader;
/// Terminal progress display
pub mod progress;
/// Discovery, coverage and summary renderers
pub mod report;
/// Tab-separated trace of growth steps
pub mod trace;
