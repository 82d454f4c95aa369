//! Content row component renderer.
//!
//! Renders one logical table row: each cell's value formatted at fixed
//! precision and right-aligned to the column width, with the overflow
//! degradation path for values that do not fit.

use std::fmt::{self, Write};

use crate::domain::Cell;
use crate::layout::{Arrangement, Geometry};
use crate::render::helpers::display_width;
use crate::render::table::RenderWarning;

/// Writes one content row.
///
/// Reads the buffer indices [`Geometry::row_indices`] yields for `row` and
/// formats each value at `precision`, right-aligned to the column width.
///
/// # Overflow policy
///
/// A formatted value longer than the column width would corrupt the column
/// alignment, so the cell renders the type's default value instead and the
/// real text is surfaced two ways: appended after the row's closing `|` as a
/// `cell: <j> value: <text>` note, and recorded as a
/// [`RenderWarning::CellOverflow`]. Overflow is designed degradation, not an
/// error.
pub(crate) fn write_row<T: Cell>(
    out: &mut String,
    data: &[T],
    row: usize,
    geometry: &Geometry,
    arrangement: Arrangement,
    precision: usize,
    warnings: &mut Vec<RenderWarning>,
) -> fmt::Result {
    // Overflowing values are collected here and printed after the row's
    // closing border so the aligned cells stay intact.
    let mut overflow_notes = String::new();

    out.push('|');
    for (cell, index) in geometry.row_indices(row, arrangement).enumerate() {
        let mut text = data[index].format_cell(precision);

        if display_width(&text) > geometry.column_width {
            write!(overflow_notes, "\n\ncell: {cell} value: {text}")?;
            tracing::warn!(row, cell, value = %text, "cell value exceeds column width, substituting default");
            warnings.push(RenderWarning::CellOverflow {
                row,
                cell,
                value: text,
            });
            text = T::default_cell(precision);
        }

        write!(out, "{text:>width$}|", width = geometry.column_width)?;
    }

    out.push_str(&overflow_notes);
    writeln!(out)
}
