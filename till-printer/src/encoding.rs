//! GBK width and encoding helpers for thermal printers
//!
//! Receipt printers count columns in GBK bytes: ASCII takes one column,
//! CJK characters take two.

use tracing::instrument;

/// FS & + FS C 1: enter Chinese mode, GBK code page
const CHINESE_ON: &[u8] = &[0x1C, 0x26, 0x1C, 0x43, 0x01];
/// FS &: re-enter Chinese mode after ESC @ resets the printer
const CHINESE_RESUME: &[u8] = &[0x1C, 0x26];
/// FS .: leave Chinese mode
const CHINESE_OFF: &[u8] = &[0x1C, 0x2E];
/// Leave Chinese mode, print € from PC858, re-enter
const EURO: &[u8] = &[0x1C, 0x2E, 0x1B, 0x74, 19, 0xD5, 0x1C, 0x26];

/// Horizontal alignment of a padded cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

fn char_width(c: char) -> usize {
    if c.is_ascii() {
        return 1;
    }
    let mut buf = [0u8; 4];
    let (bytes, _, _) = encoding_rs::GBK.encode(c.encode_utf8(&mut buf));
    bytes.len()
}

/// Printed width of a string in GBK columns
pub fn gbk_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Longest prefix of `s` that fits in `max_width` columns
pub fn truncate_gbk(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (pos, c) in s.char_indices() {
        width += char_width(c);
        if width > max_width {
            return &s[..pos];
        }
    }
    s
}

/// Pad `s` with spaces to `width` columns; longer strings are left as is
pub fn pad_gbk(s: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(gbk_width(s));
    match align {
        Align::Left => format!("{s}{}", " ".repeat(gap)),
        Align::Right => format!("{}{s}", " ".repeat(gap)),
        Align::Center => {
            let left = gap / 2;
            format!("{}{s}{}", " ".repeat(left), " ".repeat(gap - left))
        }
    }
}

/// Encode receipt text with embedded ESC/POS commands as printer bytes
///
/// ASCII (every ESC/POS command) passes through untouched; runs of other
/// characters are converted to GBK.
#[instrument(skip(text), fields(len = text.len()))]
pub fn encode_escpos(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 16);
    out.extend_from_slice(CHINESE_ON);

    let mut pending = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_ascii() {
            flush_gbk(&mut pending, &mut out);
            out.push(c as u8);
            // ESC @ drops Chinese mode
            if c == '\x1B' && chars.peek() == Some(&'@') {
                chars.next();
                out.push(b'@');
                out.extend_from_slice(CHINESE_RESUME);
            }
        } else if c == '€' {
            flush_gbk(&mut pending, &mut out);
            out.extend_from_slice(EURO);
        } else {
            pending.push(c);
        }
    }
    flush_gbk(&mut pending, &mut out);

    out.extend_from_slice(CHINESE_OFF);
    out
}

fn flush_gbk(pending: &mut String, out: &mut Vec<u8>) {
    if pending.is_empty() {
        return;
    }
    let (bytes, _, unmappable) = encoding_rs::GBK.encode(pending);
    if unmappable {
        tracing::debug!(text = %pending, "Characters outside GBK replaced");
    }
    out.extend_from_slice(&bytes);
    pending.clear();
}
