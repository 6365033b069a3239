//! Input validation for ledger operations
//!
//! The UI hands over raw strings; everything is parsed and checked here
//! before the ledger is touched, so a failed call never mutates state.

use crate::money;
use rust_decimal::Decimal;
use shared::ErrorCode;
use thiserror::Error;

/// Validation errors (operation is a no-op, caller should re-prompt)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Price cannot be negative!")]
    NegativePrice(f64),

    #[error("Item name is required")]
    EmptyName,

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("quantity must be positive, got {0}")]
    NonPositiveQuantity(f64),

    #[error("quantity must not be negative, got {0}")]
    NegativeQuantity(f64),

    #[error("{field} is too large to calculate, got {value}")]
    ExceedsMaximum { field: &'static str, value: f64 },

    #[error("item index {index} out of range (order has {len} items)")]
    ItemIndexOutOfRange { index: usize, len: usize },

    #[error("history index {index} out of range (history has {len} entries)")]
    HistoryIndexOutOfRange { index: usize, len: usize },
}

impl ValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::NegativePrice(_) => ErrorCode::NegativePrice,
            ValidationError::EmptyName | ValidationError::MissingField { .. } => {
                ErrorCode::RequiredField
            }
            ValidationError::NotANumber { .. } | ValidationError::NotFinite { .. } => {
                ErrorCode::InvalidFormat
            }
            ValidationError::NonPositiveQuantity(_) | ValidationError::NegativeQuantity(_) => {
                ErrorCode::InvalidQuantity
            }
            ValidationError::ExceedsMaximum { .. } => ErrorCode::ValueOutOfRange,
            ValidationError::ItemIndexOutOfRange { .. } => ErrorCode::ItemNotFound,
            ValidationError::HistoryIndexOutOfRange { .. } => ErrorCode::HistoryEntryNotFound,
        }
    }
}

/// Trim the name and capitalize its first letter
///
/// Only the first character changes case; `"gala apple"` becomes `"Gala apple"`.
pub fn normalize_name(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        None => Err(ValidationError::EmptyName),
        Some(first) => Ok(first.to_uppercase().chain(chars).collect()),
    }
}

/// Parse a user-entered number
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber {
            field,
            value: trimmed.to_string(),
        })
}

/// Finite and representable as a `Decimal`
#[inline]
fn require_decimal(value: f64, field: &'static str) -> Result<Decimal, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field, value });
    }
    money::try_to_decimal(value).ok_or(ValidationError::ExceedsMaximum { field, value })
}

/// Negative prices get their own message, checked before anything else
pub fn validate_price_sign(price: f64) -> Result<(), ValidationError> {
    if price < 0.0 {
        return Err(ValidationError::NegativePrice(price));
    }
    Ok(())
}

/// Validate price and quantity of an item being added
pub fn validate_new_item(price: f64, quantity: f64) -> Result<(), ValidationError> {
    require_decimal(price, "price")?;
    validate_price_sign(price)?;

    require_decimal(quantity, "quantity")?;
    if quantity <= 0.0 {
        return Err(ValidationError::NonPositiveQuantity(quantity));
    }
    Ok(())
}

/// Validate a quantity edit (zero is allowed)
pub fn validate_quantity_edit(quantity: f64) -> Result<(), ValidationError> {
    require_decimal(quantity, "quantity")?;
    if quantity < 0.0 {
        return Err(ValidationError::NegativeQuantity(quantity));
    }
    Ok(())
}

/// Fail with `ExceedsMaximum` when a computed amount overflowed
///
/// `attempted` is the f64 approximation reported in the error.
pub fn require_in_range(
    field: &'static str,
    value: Option<Decimal>,
    attempted: f64,
) -> Result<Decimal, ValidationError> {
    value.ok_or(ValidationError::ExceedsMaximum {
        field,
        value: attempted,
    })
}
