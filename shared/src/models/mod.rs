//! Data models
//!
//! Shared between the ledger and the renderers.

pub mod line_item;
pub mod receipt;

// Re-exports
pub use line_item::LineItem;
pub use receipt::Receipt;
