//! Line-oriented receipt text builder
//!
//! The same layout code produces either plain text (screen preview, logs,
//! files) or text with embedded ESC/POS commands for a thermal printer.

use crate::encoding::{Align, encode_escpos, gbk_width, pad_gbk};

/// What the builder emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Plain text; styles are dropped and centering is done with spaces
    Plain,
    /// Text with ESC/POS style and alignment commands
    EscPos,
}

/// One cell of a table row: text, column width, alignment
pub type Cell<'a> = (&'a str, usize, Align);

/// String-based receipt builder
///
/// Accumulates UTF-8 text; [`EscPosTextBuilder::build_escpos`] converts it
/// to printer bytes.
pub struct EscPosTextBuilder {
    buf: String,
    width: usize,
    output: Output,
    align: Align,
}

impl EscPosTextBuilder {
    /// Builder for the given paper width in columns (58mm: 32, 80mm: 48)
    pub fn new(width: usize, output: Output) -> Self {
        Self {
            buf: String::new(),
            width,
            output,
            align: Align::Left,
        }
    }

    pub fn plain(width: usize) -> Self {
        Self::new(width, Output::Plain)
    }

    pub fn escpos(width: usize) -> Self {
        Self::new(width, Output::EscPos)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn output(&self) -> Output {
        self.output
    }

    fn command(&mut self, cmd: &str) -> &mut Self {
        if self.output == Output::EscPos {
            self.buf.push_str(cmd);
        }
        self
    }

    // === Text Output ===

    /// Write text followed by newline
    pub fn write_line(&mut self, s: &str) -> &mut Self {
        if self.output == Output::Plain && self.align != Align::Left {
            let padded = pad_gbk(s, self.width, self.align);
            self.buf.push_str(padded.trim_end());
        } else {
            self.buf.push_str(s);
        }
        self.buf.push('\n');
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    // === Alignment ===

    pub fn align_center(&mut self) -> &mut Self {
        self.align = Align::Center;
        self.command("\x1B\x61\x01")
    }

    pub fn align_left(&mut self) -> &mut Self {
        self.align = Align::Left;
        self.command("\x1B\x61\x00")
    }

    pub fn align_right(&mut self) -> &mut Self {
        self.align = Align::Right;
        self.command("\x1B\x61\x02")
    }

    // === Text Style ===

    pub fn bold_on(&mut self) -> &mut Self {
        self.command("\x1B\x45\x01")
    }

    pub fn bold_off(&mut self) -> &mut Self {
        self.command("\x1B\x45\x00")
    }

    /// Double width and height
    pub fn size_double(&mut self) -> &mut Self {
        self.command("\x1D\x21\x11")
    }

    pub fn size_reset(&mut self) -> &mut Self {
        self.command("\x1D\x21\x00")
    }

    // === Separators ===

    /// Full-width line of '='
    pub fn eq_sep(&mut self) -> &mut Self {
        let sep = "=".repeat(self.width);
        self.write_line(&sep)
    }

    /// Full-width line of '-'
    pub fn dash_sep(&mut self) -> &mut Self {
        let sep = "-".repeat(self.width);
        self.write_line(&sep)
    }

    // === Layout Helpers ===

    /// Left and right text on the same line, gap filled with spaces
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = gbk_width(left);
        let rw = gbk_width(right);

        if lw + rw >= self.width {
            self.write_line(&format!("{left} {right}"))
        } else {
            let line = format!("{left}{}{right}", " ".repeat(self.width - lw - rw));
            self.write_line(&line)
        }
    }

    /// Table row; each cell is padded to its column width
    ///
    /// Cells are not truncated, callers fit text that may overflow.
    pub fn row(&mut self, cells: &[Cell<'_>]) -> &mut Self {
        let line: String = cells
            .iter()
            .map(|&(text, width, align)| pad_gbk(text, width, align))
            .collect();
        self.write_line(line.trim_end())
    }

    // === Build ===

    /// Accumulated text
    pub fn finalize(self) -> String {
        self.buf
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Printer bytes: init, GBK-encoded content, feed and full cut
    pub fn build_escpos(self) -> Vec<u8> {
        let mut text = String::with_capacity(self.buf.len() + 8);
        // ESC @ - initialize
        text.push_str("\x1B@");
        text.push_str(&self.buf);
        // GS V 66 n - full cut after feeding n lines
        text.push_str("\x1D\x56\x42\x03");
        encode_escpos(&text)
    }
}

impl Default for EscPosTextBuilder {
    fn default() -> Self {
        Self::plain(48)
    }
}
