//! Ledger - active order and history bookkeeping
//!
//! This module handles:
//! - Adding items to the order being built (merging duplicates)
//! - Quantity edits and removals with running-total maintenance
//! - Checkout into an immutable [`Receipt`]
//! - The persisted history of every item ever added
//!
//! # Operation Flow
//!
//! ```text
//! add_item / update_quantity / remove_item / checkout / delete_history_entry
//!     ├─ 1. Validate input (nothing is touched on failure)
//!     ├─ 2. Mutate the active order and/or history
//!     ├─ 3. Adjust the running total by the delta
//!     └─ 4. Save the history if it changed
//! ```
//!
//! The active order and the history hold separate copies of each item.
//! Changes to an active item are mirrored onto the history entry that item
//! created, as long as that entry has not been deleted.

mod error;
mod links;
pub use error::*;

#[cfg(test)]
mod tests;

use crate::core::LedgerConfig;
use crate::money::{self, to_decimal, to_f64};
use links::EntryLinks;
use crate::persistence::HistoryStore;
use crate::storage::{KvStore, RedbStore, StorageResult};
use crate::validation::{self, ValidationError};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{LineItem, Receipt};
use std::collections::BTreeSet;

/// Aggregate over the whole history
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    /// Distinct order ids
    pub order_count: usize,
    /// History entries
    pub entry_count: usize,
    /// Sum of all entry totals
    pub total_amount: f64,
}

impl HistorySummary {
    pub fn from_history(history: &[LineItem]) -> Self {
        let orders: BTreeSet<u64> = history.iter().map(|e| e.order_id).collect();
        Self {
            order_count: orders.len(),
            entry_count: history.len(),
            total_amount: to_f64(money::sum_totals(history)),
        }
    }
}

/// Point-of-sale ledger
pub struct Ledger<S: KvStore> {
    history: Vec<LineItem>,
    active_order: Vec<LineItem>,
    running_total: Decimal,
    next_order_id: u64,
    persistence: HistoryStore<S>,
    links: EntryLinks,
    /// Set when the last save failed
    unsaved: bool,
}

impl<S: KvStore> std::fmt::Debug for Ledger<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("history", &self.history.len())
            .field("active_order", &self.active_order)
            .field("running_total", &self.running_total)
            .field("next_order_id", &self.next_order_id)
            .field("unsaved", &self.unsaved)
            .finish()
    }
}

impl Ledger<RedbStore> {
    /// Open the redb database from the config and load its history
    pub fn open(config: &LedgerConfig) -> LedgerResult<Self> {
        let store = RedbStore::open(&config.db_path)?;
        tracing::info!(path = %config.db_path.display(), "Ledger database opened");
        Ok(Self::init(HistoryStore::with_key(
            store,
            config.store_key.clone(),
        )))
    }
}

impl<S: KvStore> Ledger<S> {
    /// Create a ledger from persisted history
    ///
    /// The next order id continues after the highest stored one.
    pub fn init(persistence: HistoryStore<S>) -> Self {
        let history = persistence.load();
        let next_order_id = next_order_id_after(&history);
        tracing::info!(
            entries = history.len(),
            next_order_id,
            "Ledger initialized"
        );
        Self {
            links: EntryLinks::with_history(history.len()),
            history,
            active_order: Vec::new(),
            running_total: Decimal::ZERO,
            next_order_id,
            persistence,
            unsaved: false,
        }
    }

    // ========== Active Order ==========

    /// Add an item to the active order
    ///
    /// An item with the same normalized name already in the order gets its
    /// quantity increased (keeping its original unit price); otherwise a new
    /// entry is appended to both the active order and the history.
    pub fn add_item(&mut self, name: &str, price: f64, quantity: f64) -> LedgerResult<LineItem> {
        validation::validate_price_sign(price)?;
        let item_name = validation::normalize_name(name)?;
        validation::validate_new_item(price, quantity)?;

        let order_id = self.next_order_id;
        let existing = self
            .active_order
            .iter()
            .position(|i| i.matches(order_id, &item_name));

        let item = match existing {
            Some(index) => self.merge_item(index, quantity)?,
            None => {
                let total = validation::require_in_range(
                    "total",
                    money::line_total(price, quantity),
                    price * quantity,
                )?;
                let item = LineItem {
                    order_id,
                    item_name,
                    item_price: price,
                    item_quantity: quantity,
                    total_amount: to_f64(total),
                    timestamp: shared::util::now_display(),
                };
                self.running_total = self.checked_running_total(to_decimal(item.total_amount))?;
                self.active_order.push(item.clone());
                self.history.push(item.clone());
                self.links.push_new();
                tracing::info!(
                    order_id,
                    item = %item.item_name,
                    price = item.item_price,
                    quantity = item.item_quantity,
                    "Item added"
                );
                item
            }
        };

        self.persist();
        Ok(item)
    }

    /// Add an item from user-entered strings
    pub fn add_item_raw(
        &mut self,
        name: &str,
        price: &str,
        quantity: &str,
    ) -> LedgerResult<LineItem> {
        let price = validation::parse_number("price", price)?;
        validation::validate_price_sign(price)?;
        let quantity = validation::parse_number("quantity", quantity)?;
        self.add_item(name, price, quantity)
    }

    fn merge_item(&mut self, index: usize, quantity: f64) -> LedgerResult<LineItem> {
        let current = self.active_order[index].item_quantity;
        let merged = validation::require_in_range(
            "quantity",
            to_decimal(current).checked_add(to_decimal(quantity)),
            current + quantity,
        )?;
        let (merged_item, _) = self.set_quantity(index, merged)?;

        tracing::info!(
            order_id = merged_item.order_id,
            item = %merged_item.item_name,
            quantity = merged_item.item_quantity,
            "Item merged"
        );
        Ok(merged_item)
    }

    /// Set the quantity of the active item at `index` (zero is allowed)
    pub fn update_quantity(&mut self, index: usize, new_quantity: f64) -> LedgerResult<LineItem> {
        let len = self.active_order.len();
        if index >= len {
            return Err(ValidationError::ItemIndexOutOfRange { index, len }.into());
        }
        validation::validate_quantity_edit(new_quantity)?;

        let (updated, reconciled) = self.set_quantity(index, to_decimal(new_quantity))?;
        if reconciled {
            self.persist();
        }

        tracing::info!(
            order_id = updated.order_id,
            item = %updated.item_name,
            index,
            quantity = updated.item_quantity,
            "Quantity updated"
        );
        Ok(updated)
    }

    /// Give the active item at `index` a new quantity and mirror it onto its
    /// history entry
    ///
    /// Every overflow check runs before anything is written. Returns the
    /// updated item and whether a history entry was changed.
    fn set_quantity(&mut self, index: usize, quantity: Decimal) -> LedgerResult<(LineItem, bool)> {
        let previous = &self.active_order[index];
        let old_total = to_decimal(previous.total_amount);
        let mut updated = previous.clone();
        money::apply_quantity(&mut updated, quantity).ok_or(ValidationError::ExceedsMaximum {
            field: "total",
            value: previous.item_price * to_f64(quantity),
        })?;
        self.running_total =
            self.checked_running_total(to_decimal(updated.total_amount) - old_total)?;
        self.active_order[index] = updated.clone();

        let reconciled = match self.links.history_index(index) {
            Some(position) => {
                let entry = &mut self.history[position];
                entry.item_quantity = updated.item_quantity;
                entry.total_amount = updated.total_amount;
                true
            }
            None => {
                tracing::debug!(
                    order_id = updated.order_id,
                    item = %updated.item_name,
                    "No history entry to reconcile"
                );
                false
            }
        };
        Ok((updated, reconciled))
    }

    /// Running total moved by `delta`, rejected if it leaves the Decimal range
    fn checked_running_total(&self, delta: Decimal) -> Result<Decimal, ValidationError> {
        validation::require_in_range(
            "running total",
            self.running_total.checked_add(delta),
            self.running_total() + to_f64(delta),
        )
    }

    /// Set a quantity from a user-entered string
    pub fn update_quantity_raw(&mut self, index: usize, quantity: &str) -> LedgerResult<LineItem> {
        let quantity = validation::parse_number("quantity", quantity)?;
        self.update_quantity(index, quantity)
    }

    /// Remove the active item at `index`; its history entry is kept
    pub fn remove_item(&mut self, index: usize) -> LedgerResult<LineItem> {
        if index >= self.active_order.len() {
            return Err(ValidationError::ItemIndexOutOfRange {
                index,
                len: self.active_order.len(),
            }
            .into());
        }
        let removed = self.active_order.remove(index);
        self.links.remove_active(index);
        self.running_total -= to_decimal(removed.total_amount);
        tracing::info!(
            order_id = removed.order_id,
            item = %removed.item_name,
            index,
            "Item removed"
        );
        Ok(removed)
    }

    /// Close the active order and start the next one
    pub fn checkout(&mut self) -> LedgerResult<Receipt> {
        let receipt = self.current_bill()?;
        self.active_order.clear();
        self.links.clear_active();
        self.running_total = Decimal::ZERO;
        self.next_order_id += 1;
        tracing::info!(
            order_id = receipt.order_id,
            items = receipt.item_count(),
            total = receipt.total,
            "Order checked out"
        );
        Ok(receipt)
    }

    /// Receipt preview of the active order, without closing it
    pub fn current_bill(&self) -> LedgerResult<Receipt> {
        if self.active_order.is_empty() {
            return Err(LedgerError::EmptyOrder);
        }
        Ok(Receipt {
            order_id: self.next_order_id,
            items: self.active_order.clone(),
            total: self.running_total(),
            timestamp: shared::util::now_display(),
        })
    }

    // ========== History ==========

    /// Delete one history entry; the active order is not affected
    pub fn delete_history_entry(&mut self, index: usize) -> LedgerResult<LineItem> {
        if index >= self.history.len() {
            return Err(ValidationError::HistoryIndexOutOfRange {
                index,
                len: self.history.len(),
            }
            .into());
        }
        let removed = self.history.remove(index);
        self.links.remove_history(index);
        tracing::info!(
            order_id = removed.order_id,
            item = %removed.item_name,
            index,
            "History entry deleted"
        );
        self.persist();
        Ok(removed)
    }

    /// History entries of one order
    pub fn order_items(&self, order_id: u64) -> Vec<&LineItem> {
        self.history
            .iter()
            .filter(|entry| entry.order_id == order_id)
            .collect()
    }

    pub fn history_summary(&self) -> HistorySummary {
        HistorySummary::from_history(&self.history)
    }

    // ========== State ==========

    pub fn active_order(&self) -> &[LineItem] {
        &self.active_order
    }

    pub fn history(&self) -> &[LineItem] {
        &self.history
    }

    /// Sum of the active order's item totals
    pub fn running_total(&self) -> f64 {
        to_f64(self.running_total)
    }

    /// Order id the active order will be checked out with
    pub fn next_order_id(&self) -> u64 {
        self.next_order_id
    }

    /// Whether the active order has no items
    pub fn is_empty(&self) -> bool {
        self.active_order.is_empty()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn persistence(&self) -> &HistoryStore<S> {
        &self.persistence
    }

    // ========== Persistence ==========

    /// Save the history; failures keep the in-memory state and are logged
    fn persist(&mut self) {
        match self.persistence.save(&self.history) {
            Ok(()) => self.unsaved = false,
            Err(e) => {
                self.unsaved = true;
                tracing::error!(error = %e, "Failed to save history, changes kept in memory");
            }
        }
    }

    /// Save the history now
    pub fn flush(&mut self) -> StorageResult<()> {
        self.persistence.save(&self.history)?;
        self.unsaved = false;
        Ok(())
    }

    /// Flush and release the store
    ///
    /// The active order is not persisted; an unfinished order is dropped.
    pub fn teardown(mut self) -> StorageResult<S> {
        self.flush()?;
        if !self.active_order.is_empty() {
            tracing::warn!(
                order_id = self.next_order_id,
                items = self.active_order.len(),
                "Active order discarded at teardown"
            );
        }
        Ok(self.persistence.into_inner())
    }
}

/// One past the highest order id in `history`, or 1
fn next_order_id_after(history: &[LineItem]) -> u64 {
    history
        .iter()
        .map(|entry| entry.order_id)
        .max()
        .map_or(1, |max| max + 1)
}
