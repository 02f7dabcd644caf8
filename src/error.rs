use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned by the table loaders.
///
/// Every variant is fatal to the in-progress load: a loader returns no
/// collection at all on any error. The only recoverable input condition
/// (a data line with fewer columns than the schema requires) is skipped
/// silently and never surfaces here.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input path does not exist.
    #[error("file does not exist: {}", .path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Underlying I/O error (open, read, or decompress failure other than absence).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input does not begin with a valid gzip stream header.
    #[error("not a gzip stream: {}", .path.display())]
    Format {
        /// The offending path.
        path: PathBuf,
    },

    /// The header line does not match the expected column set (order-sensitive).
    #[error("schema mismatch: {message}")]
    Schema {
        /// Human-readable description of the mismatch.
        message: String,
    },

    /// A required numeric or optional-numeric field failed to parse.
    #[error("failed to parse column '{column}': {message} (raw='{raw}')")]
    Parse {
        /// Schema name of the offending column.
        column: &'static str,
        /// Raw field text as it appeared in the input.
        raw: String,
        /// Underlying parse failure.
        message: String,
    },

    /// The same identifier appeared twice among retained rows in one load.
    #[error("duplicate identifier: {id}")]
    DuplicateKey {
        /// The repeated identifier.
        id: String,
    },
}
