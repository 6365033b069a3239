use super::*;
use crate::storage::{MemoryStore, StorageError};

fn create_test_ledger() -> Ledger<MemoryStore> {
    Ledger::init(HistoryStore::new(MemoryStore::new()))
}

/// Ledger whose store already holds `history`
fn ledger_with_history(history: &[LineItem]) -> Ledger<MemoryStore> {
    let mut adapter = HistoryStore::new(MemoryStore::new());
    adapter.save(history).unwrap();
    Ledger::init(adapter)
}

/// What the store currently holds
fn stored_history<S: KvStore>(ledger: &Ledger<S>) -> Vec<LineItem> {
    ledger.persistence().try_load().unwrap()
}

fn history_item(order_id: u64, name: &str, price: f64, quantity: f64) -> LineItem {
    LineItem {
        order_id,
        item_name: name.to_string(),
        item_price: price,
        item_quantity: quantity,
        total_amount: money::line_total(price, quantity).map(to_f64).unwrap(),
        timestamp: "18/10/2026, 17:45:00".to_string(),
    }
}

/// Running total equals the sum of the active totals, and every total is price * quantity
fn assert_totals_consistent<S: KvStore>(ledger: &Ledger<S>) {
    let sum = money::sum_totals(ledger.active_order());
    assert_eq!(
        ledger.running_total, sum,
        "running total drifted from item totals"
    );
    for item in ledger.active_order().iter().chain(ledger.history()) {
        assert_eq!(
            Some(item.total_amount),
            money::line_total(item.item_price, item.item_quantity).map(to_f64),
            "stale total for {}",
            item.item_name
        );
    }
}

// ========================================================================
// Store that can be switched to reject writes
// ========================================================================

#[derive(Debug, Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_writes: bool,
}

fn write_error() -> StorageError {
    serde_json::from_str::<u8>("disk unavailable").unwrap_err().into()
}

impl KvStore for FlakyStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes {
            return Err(write_error());
        }
        self.inner.set(key, value)
    }
}

mod test_invariants;
