use super::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NAMES: &[&str] = &["apple", "Apple", "pear", "kiwi", "melon", "cheese"];
const PRICES: &[f64] = &[0.0, 0.35, 1.99, 2.0, 12.5];
const QUANTITIES: &[f64] = &[0.25, 1.0, 1.5, 3.0];

fn pick<T: Copy>(rng: &mut StdRng, values: &[T]) -> T {
    values[rng.gen_range(0..values.len())]
}

/// Random add/update/remove/checkout/delete sequences never break the totals
#[test]
fn test_random_sequences_keep_totals_consistent() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ledger = create_test_ledger();
        let mut checked_out = 0u64;

        for _ in 0..200 {
            match rng.gen_range(0..11) {
                0..=4 => {
                    let name = pick(&mut rng, NAMES);
                    let price = pick(&mut rng, PRICES);
                    let quantity = pick(&mut rng, QUANTITIES);
                    ledger.add_item(name, price, quantity).unwrap();
                }
                5 | 6 if !ledger.is_empty() => {
                    let index = rng.gen_range(0..ledger.active_order().len());
                    let quantity = pick(&mut rng, QUANTITIES) - 0.25;
                    ledger.update_quantity(index, quantity).unwrap();
                }
                7 | 8 if !ledger.is_empty() => {
                    let index = rng.gen_range(0..ledger.active_order().len());
                    ledger.remove_item(index).unwrap();
                }
                9 if !ledger.is_empty() => {
                    let expected = ledger.running_total();
                    let receipt = ledger.checkout().unwrap();
                    assert_eq!(receipt.total, expected);
                    assert_eq!(ledger.running_total(), 0.0);
                    checked_out += 1;
                }
                10 if !ledger.history().is_empty() => {
                    let index = rng.gen_range(0..ledger.history().len());
                    ledger.delete_history_entry(index).unwrap();
                }
                _ => {}
            }

            assert_totals_consistent(&ledger);

            // Active items mirror the history entry they created, if it still exists
            for (index, item) in ledger.active_order().iter().enumerate() {
                if let Some(position) = ledger.links.history_index(index) {
                    let entry = &ledger.history()[position];
                    assert_eq!(entry, item, "history entry out of sync (seed {seed})");
                }
            }

            // (order_id, item_name) unique within the active order
            let mut keys: Vec<(u64, &str)> = ledger
                .active_order()
                .iter()
                .map(|i| (i.order_id, i.item_name.as_str()))
                .collect();
            let before = keys.len();
            keys.sort();
            keys.dedup();
            assert_eq!(keys.len(), before, "duplicate active entry (seed {seed})");
        }

        assert_eq!(ledger.next_order_id(), checked_out + 1);
        assert_eq!(stored_history(&ledger), ledger.history());
    }
}
