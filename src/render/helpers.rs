//! Shared rendering utilities.
//!
//! Low-level text helpers used across the rendering components: display-width
//! measurement, floor-left centering, and the full-width separator line.

use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

/// Returns the terminal display width of `text`.
///
/// Byte length and display width coincide for the plain-ASCII output this
/// crate targets, but labels and titles are caller-supplied and may carry
/// wider glyphs.
pub(crate) fn display_width(text: &str) -> usize {
    text.width()
}

/// Writes `text` centered within `width` characters.
///
/// Left padding is `(width - len) / 2` with integer floor, right padding the
/// remainder, so odd leftover space goes to the right. Text wider than
/// `width` gets no padding at all and renders wider than its slot; the
/// caller decides whether that is acceptable degradation.
pub(crate) fn write_centered(out: &mut String, text: &str, width: usize) -> fmt::Result {
    let space = width.saturating_sub(display_width(text));
    let left = space / 2;
    let right = space - left;

    write!(out, "{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Writes a full-width separator line: `+`, dashes, `+`, newline.
pub(crate) fn write_separator(out: &mut String, table_width: usize) -> fmt::Result {
    writeln!(out, "+{}+", "-".repeat(table_width.saturating_sub(2)))
}
