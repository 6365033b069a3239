//! Receipt model

use super::LineItem;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of one checked-out order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub order_id: u64,
    /// Items in the order they were added
    pub items: Vec<LineItem>,
    /// Grand total (the running total at checkout)
    pub total: f64,
    /// Checkout time
    pub timestamp: String,
}

impl Receipt {
    /// Number of distinct item rows
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_json_shape() {
        let receipt = Receipt {
            order_id: 7,
            items: vec![LineItem {
                order_id: 7,
                item_name: "Tea".to_string(),
                item_price: 3.0,
                item_quantity: 2.0,
                total_amount: 6.0,
                timestamp: "19/10/2026, 14:05:09".to_string(),
            }],
            total: 6.0,
            timestamp: "19/10/2026, 14:06:00".to_string(),
        };
        assert_eq!(receipt.item_count(), 1);

        let value = serde_json::to_value(&receipt).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, ["items", "orderId", "timestamp", "total"]);
        assert_eq!(value["items"][0]["totalAmount"], 6.0);

        let back: Receipt = serde_json::from_value(value).unwrap();
        assert_eq!(back, receipt);
    }
}
