//! "All Transactions" report
//!
//! Each history entry takes three lines:
//!
//! ```text
//! [0] Apple                      Order 1
//!     5.00 x 2.00                  10.00
//!     19/10/2026, 09:00:00
//! ```
//!
//! The bracketed number is the entry's history index, the argument a UI
//! passes back to delete it.

use crate::config::ReceiptConfig;
use crate::encoding::{gbk_width, truncate_gbk};
use crate::escpos::EscPosTextBuilder;
use shared::LineItem;
use till_ledger::HistorySummary;
use till_ledger::money::format_money;

const REPORT_TITLE: &str = "All Transactions";
const INDENT: &str = "    ";

pub struct HistoryReportRenderer<'a> {
    history: &'a [LineItem],
    config: &'a ReceiptConfig,
}

impl<'a> HistoryReportRenderer<'a> {
    pub fn new(history: &'a [LineItem], config: &'a ReceiptConfig) -> Self {
        Self { history, config }
    }

    pub fn render(&self) -> String {
        let mut b = EscPosTextBuilder::plain(self.config.paper_width());
        self.layout(&mut b);
        b.finalize()
    }

    pub fn render_escpos(&self) -> Vec<u8> {
        let mut b = EscPosTextBuilder::escpos(self.config.paper_width());
        self.layout(&mut b);
        b.build_escpos()
    }

    fn layout(&self, b: &mut EscPosTextBuilder) {
        b.align_center();
        b.bold_on();
        b.write_line(REPORT_TITLE);
        b.bold_off();
        b.align_left();
        b.eq_sep();

        if self.history.is_empty() {
            b.align_center();
            b.write_line("No transactions recorded");
            b.align_left();
        }

        for (index, entry) in self.history.iter().enumerate() {
            let order = format!("Order {}", entry.order_id);
            let prefix = format!("[{index}] ");
            let name_width = b
                .width()
                .saturating_sub(gbk_width(&prefix) + gbk_width(&order) + 1);
            let name = truncate_gbk(&entry.item_name, name_width);
            b.line_lr(&format!("{prefix}{name}"), &order);

            let amount = format!(
                "{INDENT}{} x {}",
                format_money(entry.item_quantity),
                format_money(entry.item_price)
            );
            b.line_lr(&amount, &format_money(entry.total_amount));
            b.write_line(&format!("{INDENT}{}", entry.timestamp));
        }

        let summary = HistorySummary::from_history(self.history);
        b.eq_sep();
        b.line_lr("Orders", &summary.order_count.to_string());
        b.line_lr("Entries", &summary.entry_count.to_string());
        b.bold_on();
        b.line_lr("Grand Total", &format_money(summary.total_amount));
        b.bold_off();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PAPER_58MM;

    fn entry(order_id: u64, name: &str, price: f64, quantity: f64, total: f64) -> LineItem {
        LineItem {
            order_id,
            item_name: name.to_string(),
            item_price: price,
            item_quantity: quantity,
            total_amount: total,
            timestamp: "19/10/2026, 09:00:00".to_string(),
        }
    }

    #[test]
    fn test_render_entries() {
        let history = vec![
            entry(1, "Apple", 2.0, 5.0, 10.0),
            entry(1, "Banana", 0.25, 1.5, 0.375),
            entry(2, "Cheese", 4.25, 2.0, 8.5),
        ];
        let config = ReceiptConfig::default();
        let text = HistoryReportRenderer::new(&history, &config).render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].trim(), "All Transactions");
        assert!(lines[2].starts_with("[0] Apple"));
        assert!(lines[2].ends_with("Order 1"));
        assert!(lines[3].starts_with("    5.00 x 2.00"));
        assert!(lines[3].ends_with("10.00"));
        assert_eq!(lines[4], "    19/10/2026, 09:00:00");
        assert!(lines[8].starts_with("[2] Cheese"));
        assert!(lines[8].ends_with("Order 2"));

        let tail = &lines[lines.len() - 3..];
        assert!(tail[0].starts_with("Orders") && tail[0].ends_with('2'));
        assert!(tail[1].starts_with("Entries") && tail[1].ends_with('3'));
        assert!(tail[2].starts_with("Grand Total") && tail[2].ends_with("18.88"));
        assert!(lines.iter().all(|l| gbk_width(l) <= 48));
    }

    #[test]
    fn test_render_empty() {
        let config = ReceiptConfig::with_width(PAPER_58MM);
        let text = HistoryReportRenderer::new(&[], &config).render();
        assert!(text.contains("No transactions recorded"));
        let last = text.lines().last().unwrap();
        assert!(last.starts_with("Grand Total") && last.ends_with("0.00"));
    }

    #[test]
    fn test_long_name_fits_narrow_paper() {
        let history = vec![entry(12, "Family Size Chocolate Chip Cookies", 3.99, 1.0, 3.99)];
        let config = ReceiptConfig::with_width(PAPER_58MM);
        let text = HistoryReportRenderer::new(&history, &config).render();
        let first = text.lines().nth(2).unwrap();
        assert_eq!(gbk_width(first), 32);
        assert!(first.starts_with("[0] Family"));
        assert!(first.ends_with(" Order 12"));
    }

    #[test]
    fn test_render_escpos() {
        let history = vec![entry(1, "苹果", 2.0, 1.0, 2.0)];
        let config = ReceiptConfig::default();
        let bytes = HistoryReportRenderer::new(&history, &config).render_escpos();
        // GBK for 苹果
        assert!(bytes.windows(4).any(|w| w == [0xC6, 0xBB, 0xB9, 0xFB]));
    }
}
