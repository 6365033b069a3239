//! Shared types for the till workspace
//!
//! Domain models, unified error codes and time utilities used by both
//! the ledger and the receipt printer.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ErrorCode, InvalidErrorCode};
pub use models::{LineItem, Receipt};
pub use serde::{Deserialize, Serialize};
