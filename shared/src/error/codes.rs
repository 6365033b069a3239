//! Error codes for the till workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid format (not a number)
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Order ====================
    /// Checkout or bill requested with no items
    OrderEmpty = 4001,
    /// Item index does not exist in the active order
    ItemNotFound = 4002,
    /// Price is negative
    NegativePrice = 4003,
    /// Quantity is not allowed
    InvalidQuantity = 4004,
    /// History index does not exist
    HistoryEntryNotFound = 4005,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Stored data could not be decoded
    StorageCorrupted = 9002,
    /// Store could not be opened or written
    StorageUnavailable = 9003,
}

impl ErrorCode {
    /// Numeric value of the code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Default English message
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            ErrorCode::OrderEmpty => "No transactions to print",
            ErrorCode::ItemNotFound => "Item not found in current order",
            ErrorCode::NegativePrice => "Price cannot be negative",
            ErrorCode::InvalidQuantity => "Invalid quantity",
            ErrorCode::HistoryEntryNotFound => "Transaction not found in history",

            ErrorCode::InternalError => "Internal error",
            ErrorCode::StorageCorrupted => "Stored data is corrupted",
            ErrorCode::StorageUnavailable => "Storage is unavailable",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            4001 => Ok(ErrorCode::OrderEmpty),
            4002 => Ok(ErrorCode::ItemNotFound),
            4003 => Ok(ErrorCode::NegativePrice),
            4004 => Ok(ErrorCode::InvalidQuantity),
            4005 => Ok(ErrorCode::HistoryEntryNotFound),

            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageCorrupted),
            9003 => Ok(ErrorCode::StorageUnavailable),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::OrderEmpty.code(), 4001);
        assert_eq!(ErrorCode::NegativePrice.code(), 4003);
        assert_eq!(ErrorCode::StorageCorrupted.code(), 9002);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::OrderEmpty.is_success());
    }

    #[test]
    fn test_try_from_roundtrip() {
        for code in [
            ErrorCode::Unknown,
            ErrorCode::InvalidFormat,
            ErrorCode::ItemNotFound,
            ErrorCode::HistoryEntryNotFound,
            ErrorCode::StorageUnavailable,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
    }

    #[test]
    fn test_serialize_as_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::OrderEmpty).unwrap(), "4001");
        let code: ErrorCode = serde_json::from_str("4003").unwrap();
        assert_eq!(code, ErrorCode::NegativePrice);
        assert!(serde_json::from_str::<ErrorCode>("4999").is_err());
    }

    #[test]
    fn test_display_and_message() {
        assert_eq!(ErrorCode::OrderEmpty.to_string(), "4001");
        assert_eq!(ErrorCode::NegativePrice.message(), "Price cannot be negative");
        assert_eq!(
            InvalidErrorCode(12).to_string(),
            "invalid error code: 12"
        );
    }
}
