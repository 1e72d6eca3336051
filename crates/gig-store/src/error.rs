//! Store error types.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique-index violation on insert.
    #[error("Duplicate document: {0}")]
    Duplicate(String),

    #[error("Invalid document id: {0}")]
    InvalidId(String),

    #[error("Driver error: {0}")]
    Driver(#[from] mongodb::error::Error),
}

impl StoreError {
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId(id.into())
    }

    /// True if the operation failed because the document already exists.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }

    /// True if the caller supplied a malformed id rather than hitting a
    /// store-side fault.
    pub fn is_client_fault(&self) -> bool {
        matches!(self, Self::Duplicate(_) | Self::InvalidId(_))
    }
}

/// True if the driver error reports a unique-key violation (server code 11000).
pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(we)) => we.code == 11000,
        ErrorKind::Command(ce) => ce.code == 11000,
        _ => false,
    }
}
