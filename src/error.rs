//! Error types for carbon-ledger
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::ValidationError;
use crate::domain::ports::LedgerStoreError;

/// Result type alias for carbon-ledger operations
pub type CarbonResult<T> = Result<T, CarbonError>;

/// Main error type for carbon-ledger operations
#[derive(Error, Debug)]
pub enum CarbonError {
    /// Input record rejected before calculation
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Ledger storage failed and the caller asked to see it
    #[error(transparent)]
    Ledger(#[from] LedgerStoreError),

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Input file could not be parsed as an input record
    #[error("invalid input file {file}: {message}")]
    InvalidInputFile { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
