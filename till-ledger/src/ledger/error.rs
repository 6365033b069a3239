use crate::storage::StorageError;
use crate::validation::ValidationError;
use shared::ErrorCode;
use thiserror::Error;

/// Ledger errors
///
/// Every variant leaves the ledger unchanged.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No transactions to print!")]
    EmptyOrder,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Map a storage error to an error code
fn classify_storage_error(e: &StorageError) -> ErrorCode {
    if let StorageError::Serialization(_) = e {
        return ErrorCode::StorageCorrupted;
    }

    // redb errors are classified by message
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("corrupt") || err_str.contains("invalid database") {
        return ErrorCode::StorageCorrupted;
    }

    ErrorCode::StorageUnavailable
}

impl LedgerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LedgerError::Validation(e) => e.code(),
            LedgerError::EmptyOrder => ErrorCode::OrderEmpty,
            LedgerError::Storage(e) => classify_storage_error(e),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, LedgerError::Validation(_))
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
