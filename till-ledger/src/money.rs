//! Money calculation utilities using rust_decimal for precision
//!
//! Line totals and the running total are computed with `Decimal` and then
//! converted to `f64` for the data model. Values are not rounded when
//! stored; rounding to cents only happens for display.
//!
//! Item arithmetic is checked: a product or sum that does not fit a
//! `Decimal` yields `None` instead of panicking.

use rust_decimal::prelude::*;
use shared::LineItem;

/// Display precision (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert f64 to Decimal, `None` when it is not finite or out of range
#[inline]
pub fn try_to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Convert Decimal back to f64 for the data model
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.normalize().to_f64().unwrap_or_default()
}

/// Round a monetary value to cents
pub fn round_money(value: f64) -> f64 {
    to_decimal(value)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Format a monetary value with two decimals (`12.50`)
pub fn format_money(value: f64) -> String {
    format!("{:.2}", round_money(value))
}

/// `price * quantity`, `None` on overflow
pub fn line_total(price: f64, quantity: f64) -> Option<Decimal> {
    to_decimal(price).checked_mul(to_decimal(quantity))
}

/// Sum of `total_amount` over the given items
///
/// Stored history can hold arbitrary totals, so the sum saturates at
/// `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
pub fn sum_totals<'a>(items: impl IntoIterator<Item = &'a LineItem>) -> Decimal {
    items.into_iter().fold(Decimal::ZERO, |sum, item| {
        let total = to_decimal(item.total_amount);
        sum.checked_add(total).unwrap_or_else(|| {
            tracing::warn!(
                order_id = item.order_id,
                item = %item.item_name,
                total = item.total_amount,
                "Total overflows, saturating"
            );
            sum.saturating_add(total)
        })
    })
}

/// Set the quantity of an item and recompute its total
///
/// Returns `None` and leaves the item untouched when the new total
/// overflows.
pub fn apply_quantity(item: &mut LineItem, quantity: Decimal) -> Option<()> {
    let total = to_decimal(item.item_price).checked_mul(quantity)?;
    item.item_quantity = to_f64(quantity);
    item.total_amount = to_f64(total);
    Some(())
}
