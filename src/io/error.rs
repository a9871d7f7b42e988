//! Error types and context management for hyperinterval search operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all search operations
#[derive(Debug)]
pub enum HintError {
    /// Database content doesn't meet the requirements of the search or measure
    InvalidSourceData {
        /// Description of what's wrong with the data
        reason: String,
    },

    /// Search parameter validation failed
    ///
    /// Raised before any search begins. Values are never clamped into range.
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of the violated bound
        reason: String,
    },

    /// Malformed database text
    Parse {
        /// File being read
        path: PathBuf,
        /// One-based line number of the offending record
        line: usize,
        /// Description of the malformed content
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for HintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Parse { path, line, reason } => {
                write!(f, "Parse error in '{}' line {line}: {reason}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for HintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for search results
pub type Result<T> = std::result::Result<T, HintError>;

/// Enriches loader and writer errors with the file they concern
pub trait WithContext<T> {
    /// Attach a path to path-carrying errors that were raised without one
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<HintError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                HintError::Parse { path: target, .. }
                | HintError::FileSystem { path: target, .. }
                    if target.as_os_str().is_empty() =>
                {
                    *target = path.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }
}

impl From<std::io::Error> for HintError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::new(),
            operation: "io",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> HintError {
    HintError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_data(reason: &impl ToString) -> HintError {
    HintError::InvalidSourceData {
        reason: reason.to_string(),
    }
}

/// Create a parse error whose path is filled in later through [`WithContext::with_path`]
pub fn parse_error(line: usize, reason: &impl ToString) -> HintError {
    HintError::Parse {
        path: PathBuf::new(),
        line,
        reason: reason.to_string(),
    }
}
