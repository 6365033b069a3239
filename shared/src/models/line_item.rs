//! Line item model
//!
//! One priced row of a customer order. The same shape is used for the
//! active order, the persisted history and receipts.

use serde::{Deserialize, Serialize};

/// A single item entry of an order
///
/// Field names serialize in camelCase so the persisted history keeps the
/// `orderId` / `itemName` / ... layout of the stored array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Order this item belongs to
    pub order_id: u64,
    /// Normalized item name (first letter capitalized)
    pub item_name: String,
    /// Unit price
    pub item_price: f64,
    /// Quantity, may be fractional (weighed goods)
    pub item_quantity: f64,
    /// `item_price * item_quantity`, kept in sync by the ledger
    pub total_amount: f64,
    /// Human-readable creation time, never updated
    pub timestamp: String,
}

impl LineItem {
    /// Whether this entry is identified by the given `(order_id, item_name)` key
    pub fn matches(&self, order_id: u64, item_name: &str) -> bool {
        self.order_id == order_id && self.item_name == item_name
    }
}
