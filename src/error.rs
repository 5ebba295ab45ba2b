//! Crate error taxonomy.

use std::path::PathBuf;

use thiserror::Error;

pub use crate::adif::AdifError;
pub use crate::persist::PersistError;

/// Result alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Validation failures raised while reading a transcribed QTC block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No line contains `QTC`.
    #[error("QTC line not found in input")]
    MissingHeader,

    /// The header line has no `QTC <n>/<total>` pair.
    #[error("invalid QTC header format: {line:?}")]
    InvalidHeaderFormat {
        /// Offending header line.
        line: String,
    },

    /// The declared total disagrees with the lines following the header.
    #[error("expected {expected} QTC lines, but found {actual}")]
    EntryCountMismatch {
        /// Count declared in the header.
        expected: usize,
        /// Non-empty lines after the header.
        actual: usize,
    },

    /// The header line has no `RX <freq>` field.
    #[error("frequency information missing in QTC header")]
    MissingFrequency,

    /// The `RX` value does not fit a frequency.
    #[error("frequency {value:?} out of range")]
    InvalidFrequency {
        /// Digits following `RX`.
        value: String,
    },

    /// The header line has no `YYYY-MM-DD HH:MMZ` timestamp.
    #[error("date and time in QTC header are missing or invalid")]
    InvalidTimestamp,
}

/// Top-level error returned by the runtime entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be opened, read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The contact log is not valid ADIF.
    #[error("ADIF error: {0}")]
    Adif(#[from] AdifError),

    /// The QTC block failed validation.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// The cursor store failed.
    #[error("cursor storage error: {0}")]
    Storage(#[from] PersistError),

    /// A batch size of zero was requested.
    #[error("batch size must be greater than 0")]
    ZeroBatchSize,

    /// A required argument was empty or malformed.
    #[error("invalid argument: {arg}={value:?}")]
    InvalidArgument {
        /// Argument name.
        arg: &'static str,
        /// Rejected value.
        value: String,
    },
}

impl Error {
    /// Wraps an I/O failure with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
