//! Error handling for the wallet core
//!
//! Engine failures are carried as boxed sources so callers can unwrap them
//! back to the concrete engine error.

use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

/// Boxed engine error kept as the cause of a [`WalletError`]
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Result type alias for wallet core operations
pub type Result<T> = std::result::Result<T, WalletError>;

/// Error types for wallet core operations
#[derive(Debug)]
pub enum WalletError {
    /// The engine could not open a store at the given directory
    OpenDatabase { path: PathBuf, source: BoxError },
    /// The engine failed while releasing a store
    CloseDatabase(BoxError),
    /// A read or write against an open store failed
    Database(BoxError),
    /// The handle has no live connection
    StoreClosed,
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::OpenDatabase { path, source } => {
                write!(f, "error opening database at {}: {source}", path.display())
            }
            // Close failures are reported exactly as the engine worded them
            WalletError::CloseDatabase(source) => write!(f, "{source}"),
            WalletError::Database(source) => write!(f, "Database error: {source}"),
            WalletError::StoreClosed => write!(f, "Database error: store is not open"),
        }
    }
}

impl StdError for WalletError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            WalletError::OpenDatabase { source, .. }
            | WalletError::CloseDatabase(source)
            | WalletError::Database(source) => Some(source.as_ref()),
            WalletError::StoreClosed => None,
        }
    }
}
