//! Error types for cidrpack.

use thiserror::Error;

use crate::prefix::PrefixError;

/// Error type for cidrpack operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A data row failed prefix validation
    #[error("row {row}: {source}")]
    Prefix {
        row: usize,
        #[source]
        source: PrefixError,
    },

    /// A record has neither one nor two fields
    #[error("row {row}: unexpected number of columns: got {count}, want 1 or 2")]
    ColumnCount { row: usize, count: usize },

    /// Input contained no data rows after comment and header filtering
    #[error("input contains no data rows")]
    EmptyInput,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for cidrpack operations.
pub type Result<T> = std::result::Result<T, Error>;
