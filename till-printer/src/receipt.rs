//! Customer bill for a checked-out order

use crate::config::{PAPER_80MM, ReceiptConfig};
use crate::encoding::{Align, truncate_gbk};
use crate::escpos::EscPosTextBuilder;
use shared::Receipt;
use till_ledger::money::format_money;

const RECEIPT_TITLE: &str = "Market Billing Receipt";

/// Column widths `[name, price, quantity, total]`
fn item_columns(width: usize) -> [usize; 4] {
    let (price, quantity, total) = if width >= PAPER_80MM {
        (9, 8, 10)
    } else {
        (7, 6, 8)
    };
    [
        width.saturating_sub(price + quantity + total),
        price,
        quantity,
        total,
    ]
}

pub struct ReceiptRenderer<'a> {
    receipt: &'a Receipt,
    config: &'a ReceiptConfig,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(receipt: &'a Receipt, config: &'a ReceiptConfig) -> Self {
        Self { receipt, config }
    }

    /// Plain-text bill
    pub fn render(&self) -> String {
        let mut b = EscPosTextBuilder::plain(self.config.paper_width());
        self.layout(&mut b);
        b.finalize()
    }

    /// GBK-encoded ESC/POS bytes, ready for a thermal printer
    pub fn render_escpos(&self) -> Vec<u8> {
        let mut b = EscPosTextBuilder::escpos(self.config.paper_width());
        self.layout(&mut b);
        let bytes = b.build_escpos();
        tracing::debug!(
            order_id = self.receipt.order_id,
            bytes = bytes.len(),
            "Receipt rendered for printer"
        );
        bytes
    }

    fn layout(&self, b: &mut EscPosTextBuilder) {
        let [name_w, price_w, qty_w, total_w] = item_columns(b.width());

        // Header
        b.align_center();
        b.bold_on();
        b.write_line(RECEIPT_TITLE);
        b.bold_off();
        b.write_line(&format!("Order ID: {}", self.receipt.order_id));
        b.align_left();
        b.eq_sep();

        // Items
        b.row(&[
            ("Item Name", name_w, Align::Left),
            ("Price", price_w, Align::Right),
            ("Qty", qty_w, Align::Right),
            ("Total", total_w, Align::Right),
        ]);
        b.dash_sep();
        for item in &self.receipt.items {
            let name = truncate_gbk(&item.item_name, name_w.saturating_sub(1));
            let price = format_money(item.item_price);
            let quantity = format_money(item.item_quantity);
            let total = format_money(item.total_amount);
            b.row(&[
                (name, name_w, Align::Left),
                (&price, price_w, Align::Right),
                (&quantity, qty_w, Align::Right),
                (&total, total_w, Align::Right),
            ]);
        }
        b.eq_sep();

        b.bold_on();
        b.line_lr("Grand Total", &format_money(self.receipt.total));
        b.bold_off();
        b.dash_sep();

        // Footer
        b.align_center();
        for line in &self.config.footer {
            b.write_line(line);
        }
        b.write_line(&format!("Market Name: {}", self.config.market_name));
        b.write_line(&format!("Date: {}", self.receipt.timestamp));
        b.align_left();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PAPER_58MM;
    use crate::encoding::gbk_width;
    use shared::LineItem;

    fn item(name: &str, price: f64, quantity: f64, total: f64) -> LineItem {
        LineItem {
            order_id: 3,
            item_name: name.to_string(),
            item_price: price,
            item_quantity: quantity,
            total_amount: total,
            timestamp: "19/10/2026, 14:05:09".to_string(),
        }
    }

    fn sample_receipt() -> Receipt {
        Receipt {
            order_id: 3,
            items: vec![
                item("Apple", 2.0, 5.0, 10.0),
                item("Bread", 2.5, 2.0, 5.0),
                item("Cheese", 4.25, 2.0, 8.5),
            ],
            total: 23.5,
            timestamp: "19/10/2026, 14:06:00".to_string(),
        }
    }

    #[test]
    fn test_render_layout() {
        let receipt = sample_receipt();
        let config = ReceiptConfig::default();
        let text = ReceiptRenderer::new(&receipt, &config).render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].trim(), "Market Billing Receipt");
        assert!(lines[0].starts_with(' '));
        assert_eq!(lines[1].trim(), "Order ID: 3");
        assert!(lines[3].starts_with("Item Name"));
        assert!(lines[3].ends_with("Total"));

        let apple = lines.iter().find(|l| l.starts_with("Apple")).unwrap();
        assert_eq!(gbk_width(apple), 48);
        assert!(apple.ends_with("2.00    5.00     10.00"));

        let grand = lines.iter().find(|l| l.starts_with("Grand Total")).unwrap();
        assert!(grand.ends_with("23.50"));
        assert_eq!(grand.len(), 48);

        assert!(text.contains("Thank you for shopping with us!"));
        assert!(text.contains("Market Name: Your Market Name"));
        assert!(text.contains("Date: 19/10/2026, 14:06:00"));
        assert!(lines.iter().all(|l| gbk_width(l) <= 48));
        assert!(!text.contains('\x1B'));
    }

    #[test]
    fn test_render_narrow_paper() {
        let mut receipt = sample_receipt();
        receipt.items.push(item("Extra Virgin Olive Oil", 12.99, 1.0, 12.99));
        let config = ReceiptConfig::with_width(PAPER_58MM).market_name("Corner Shop");
        let text = ReceiptRenderer::new(&receipt, &config).render();

        assert!(text.lines().all(|l| gbk_width(l) <= 32));
        // Long names are cut to the name column
        assert!(text.contains("Extra Virg"));
        assert!(!text.contains("Olive"));
        assert!(text.contains("Market Name: Corner Shop"));
    }

    #[test]
    fn test_display_rounding() {
        let receipt = Receipt {
            order_id: 1,
            items: vec![item("Banana", 0.25, 0.5, 0.125)],
            total: 0.125,
            timestamp: String::new(),
        };
        let config = ReceiptConfig::default();
        let text = ReceiptRenderer::new(&receipt, &config).render();
        let banana = text.lines().find(|l| l.starts_with("Banana")).unwrap();
        assert!(banana.ends_with("0.25    0.50      0.13"));
    }

    #[test]
    fn test_render_escpos() {
        let receipt = sample_receipt();
        let config = ReceiptConfig::default();
        let bytes = ReceiptRenderer::new(&receipt, &config).render_escpos();

        // Bold on around the title
        assert!(bytes.windows(3).any(|w| w == [0x1B, 0x45, 0x01]));
        assert!(bytes.windows(22).any(|w| w == RECEIPT_TITLE.as_bytes()));
        assert!(bytes.ends_with(&[0x1D, 0x56, 0x42, 0x03, 0x1C, 0x2E]));
    }
}
