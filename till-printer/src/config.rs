use serde::{Deserialize, Serialize};

/// Columns on 58mm paper
pub const PAPER_58MM: usize = 32;
/// Columns on 80mm paper
pub const PAPER_80MM: usize = 48;

/// Receipt layout configuration
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `width` | 48 | paper width in columns, at least 32 |
/// | `market_name` | `Your Market Name` | printed in the footer |
/// | `footer` | thank-you line | centered lines above the market name |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReceiptConfig {
    pub width: usize,
    pub market_name: String,
    pub footer: Vec<String>,
}

impl ReceiptConfig {
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn market_name(mut self, name: impl Into<String>) -> Self {
        self.market_name = name.into();
        self
    }

    pub fn footer<I, L>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.footer = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Width used for layout; narrower values fall back to 58mm paper
    pub fn paper_width(&self) -> usize {
        self.width.max(PAPER_58MM)
    }
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            width: PAPER_80MM,
            market_name: "Your Market Name".to_string(),
            footer: vec!["Thank you for shopping with us!".to_string()],
        }
    }
}
