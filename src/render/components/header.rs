//! Column header component renderer.

use std::fmt::{self, Write};

use crate::layout::Geometry;
use crate::render::helpers::{write_centered, write_separator};

/// Writes the `|`-delimited column header row and its trailing separator.
///
/// Each label is centered within `column_width` using the same floor-left,
/// remainder-right rule as the title banner. Labels wider than the column
/// are not validated; they render unpadded and push the row wider than the
/// table (degraded output, no panic).
pub(crate) fn write_column_header(
    out: &mut String,
    labels: &[String],
    geometry: &Geometry,
) -> fmt::Result {
    out.push('|');
    for label in labels {
        write_centered(out, label, geometry.column_width)?;
        out.push('|');
    }
    writeln!(out)?;

    write_separator(out, geometry.table_width)
}
