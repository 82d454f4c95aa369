//! Title banner component renderer.
//!
//! Renders the table's opening banner: a blank line, a dashed border, the
//! title centered between `|` frames, and the border again.

use std::fmt::{self, Write};

use crate::render::helpers::{write_centered, write_separator};

/// Writes the title banner.
///
/// Layout for `table_width` w:
///
/// ```text
///
/// +----(w-2 dashes)----+
/// |   centered title   |
/// +----(w-2 dashes)----+
/// ```
///
/// The title is centered in `w - 2` characters with floor-left padding, so
/// odd leftover space falls to the right. Construction validation guarantees
/// the title fits.
pub(crate) fn write_banner(out: &mut String, name: &str, table_width: usize) -> fmt::Result {
    writeln!(out)?;
    write_separator(out, table_width)?;

    out.push('|');
    write_centered(out, name, table_width.saturating_sub(2))?;
    writeln!(out, "|")?;

    write_separator(out, table_width)
}
