//! # till-printer
//!
//! Printable renderings of the till's data.
//!
//! ## Scope
//!
//! - Customer bill for a checked-out order ([`ReceiptRenderer`])
//! - The full transaction history ([`HistoryReportRenderer`])
//! - Plain text for previews, ESC/POS bytes (GBK) for thermal printers
//!
//! Sending bytes to a device is left to the host application.
//!
//! ## Example
//!
//! ```ignore
//! use till_printer::{ReceiptConfig, ReceiptRenderer};
//!
//! let receipt = ledger.checkout()?;
//! let config = ReceiptConfig::with_width(32).market_name("Corner Shop");
//! let renderer = ReceiptRenderer::new(&receipt, &config);
//! println!("{}", renderer.render());
//! let bytes = renderer.render_escpos();
//! ```

mod config;
mod encoding;
mod escpos;
mod history;
mod receipt;

// Re-exports
pub use config::{PAPER_58MM, PAPER_80MM, ReceiptConfig};
pub use encoding::{Align, encode_escpos, gbk_width, pad_gbk, truncate_gbk};
pub use escpos::{Cell, EscPosTextBuilder, Output};
pub use history::HistoryReportRenderer;
pub use receipt::ReceiptRenderer;
