//! Unified error codes
//!
//! Every ledger error maps to an [`ErrorCode`] so a UI can localize the
//! message without parsing error strings.

mod codes;

pub use codes::{ErrorCode, InvalidErrorCode};
