//! Search constants and runtime configuration defaults

/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

/// Smallest sample that still allows a seed pair plus one growth candidate
pub const MIN_SAMPLE_SIZE: usize = 3;

/// Default number of non-improving growth steps tolerated per region
pub const DEFAULT_PERSEVERANCE: usize = 0;

/// Default number of consecutive discarded regions tolerated before stopping
pub const DEFAULT_THOROUGHNESS: usize = 10;

/// Command-line value that switches dimension pruning off
pub const DISABLED_DIMENSION_THOROUGHNESS: i64 = -1;

/// Per-column discretization cost of a binary column in nats
///
/// Together with the `ln 2` per dimension charged by the model cost this
/// prices each binary column at `ln 3`, one of three non-empty intervals.
pub const BINARY_DISCRETIZATION_PER_COLUMN: f64 = 0.202_732_554_054_082_2;

// Progress display settings
/// Spinner refresh interval
pub const PROGRESS_TICK_MS: u64 = 100;

/// Placeholder printed for unconstrained columns in itemset notation
pub const ITEMSET_WILDCARD: &str = "*";
