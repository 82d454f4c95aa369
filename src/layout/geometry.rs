//! Table geometry derivation and flat-buffer index mapping.
//!
//! This module turns the caller-supplied layout parameters (buffer size, column
//! count, total table width) into the derived geometry every render pass works
//! from: row count, column count, and per-column character width. It also maps
//! logical `(row, cell)` positions back to flat buffer indices for both data
//! arrangements.

use serde::{Deserialize, Serialize};

use crate::domain::{Result, TablizerError};

/// Interpretation of a flat buffer as a two-dimensional grid.
///
/// The same buffer can be read row by row or column by column:
///
/// - `RowMajor`: consecutive buffer elements fill a row; cell `j` of row `i`
///   reads index `i * cols + j`.
/// - `ColumnMajor`: the buffer is `cols` contiguous column blocks of length
///   `rows`; cell `j` of row `i` reads index `i + j * rows`.
///
/// # Examples
///
/// ```
/// use tablizer::{Arrangement, Geometry};
///
/// let geometry = Geometry::derive(6, 2, 13).unwrap();
/// let row_major: Vec<usize> = geometry.row_indices(0, Arrangement::RowMajor).collect();
/// let col_major: Vec<usize> = geometry.row_indices(0, Arrangement::ColumnMajor).collect();
/// assert_eq!(row_major, vec![0, 1]);
/// assert_eq!(col_major, vec![0, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arrangement {
    /// Consecutive buffer elements fill rows.
    RowMajor,
    /// Consecutive buffer elements fill columns.
    ColumnMajor,
}

/// Derived table geometry, computed once at construction and invariant afterward.
///
/// # Fields
///
/// - `table_width`: Total character width of the table, borders included
/// - `cols`: Column count, defined by the number of labels
/// - `rows`: Row count, `size / cols` with integer truncation
/// - `column_width`: Character width allotted to one data column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub table_width: usize,
    pub cols: usize,
    pub rows: usize,
    pub column_width: usize,
}

impl Geometry {
    /// Derives the table geometry from buffer size, column count, and width.
    ///
    /// The row count is `size / cols` with integer truncation: when `size` is
    /// not a multiple of `cols`, the trailing elements do not fill a row and
    /// are dropped from the layout (logged at debug level). The column width
    /// is `(table_width - (cols + 1)) / cols`, reserving one border character
    /// per column boundary plus one.
    ///
    /// # Errors
    ///
    /// - [`TablizerError::ZeroWidth`] when `table_width` is zero.
    /// - [`TablizerError::WidthTooSmall`] when `table_width < 2 * cols + 1`,
    ///   i.e. the width cannot give every column at least one content
    ///   character beside its border.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablizer::Geometry;
    ///
    /// let geometry = Geometry::derive(10, 3, 22).unwrap();
    /// assert_eq!(geometry.rows, 3); // one trailing element dropped
    /// assert_eq!(geometry.column_width, 6); // (22 - 4) / 3
    /// ```
    pub fn derive(size: usize, cols: usize, table_width: usize) -> Result<Self> {
        if table_width == 0 {
            return Err(TablizerError::ZeroWidth);
        }

        if table_width < 2 * cols + 1 {
            return Err(TablizerError::WidthTooSmall {
                width: table_width,
                cols,
            });
        }

        let rows = size / cols;
        let column_width = (table_width - (cols + 1)) / cols;

        let dropped = size % cols;
        if dropped != 0 {
            tracing::debug!(size, cols, dropped, "trailing elements do not fill a row and are dropped");
        }

        Ok(Self {
            table_width,
            cols,
            rows,
            column_width,
        })
    }

    /// Returns the flat buffer indices read by row `row`, in cell order.
    ///
    /// For `RowMajor` the indices start at `row * cols` with stride 1; for
    /// `ColumnMajor` they start at `row` with stride `rows`. Every yielded
    /// index is below `rows * cols` and therefore within any buffer the
    /// geometry was derived from.
    pub fn row_indices(&self, row: usize, arrangement: Arrangement) -> impl Iterator<Item = usize> {
        let (start, stride) = match arrangement {
            Arrangement::RowMajor => (row * self.cols, 1),
            Arrangement::ColumnMajor => (row, self.rows),
        };

        (0..self.cols).map(move |cell| start + cell * stride)
    }
}
