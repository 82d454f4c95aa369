//! The table renderer and its render pipeline.
//!
//! This module defines [`TableRenderer`], which borrows a flat data buffer and
//! lays it out as an ASCII-art table, and the [`RenderOutput`] /
//! [`RenderWarning`] types its render pass produces.
//!
//! # Pipeline
//!
//! Rendering runs a strict, single-pass sequence into a fresh buffer:
//!
//! ```text
//! blank line → title banner → column header → content rows → separator → newline
//! ```
//!
//! Any formatting failure inside the pipeline is caught at the top, logged,
//! and attached as a warning; the (possibly partial) text is still returned.
//! Render calls never propagate an error to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Cell, Result, TablizerError};
use crate::layout::{Arrangement, Geometry};
use crate::render::components;
use crate::render::helpers::{display_width, write_separator};

/// Default number of digits after the decimal point for numeric cells.
const DEFAULT_PRECISION: usize = 8;

/// Diagnostic attached to a render pass.
///
/// Warnings are the side channel for everything that degrades output without
/// failing it: cell overflows and mid-pipeline formatting anomalies. They are
/// also emitted through `tracing` as they occur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderWarning {
    /// A formatted value was wider than its column.
    ///
    /// The cell rendered the type's default value and the real text was
    /// appended to the row as a `cell: <j> value: <text>` note.
    CellOverflow {
        /// Zero-based row the value belongs to.
        row: usize,
        /// Zero-based cell position within the row.
        cell: usize,
        /// The fixed-precision text that did not fit.
        value: String,
    },

    /// The pipeline stopped early on a formatting failure.
    ///
    /// The returned text holds everything rendered up to the failure plus the
    /// trailing newline. Callers cannot distinguish complete from truncated
    /// output except through this warning.
    Incomplete {
        /// Description of the underlying failure.
        detail: String,
    },
}

/// The result of one render pass.
///
/// The text payload is always populated, possibly degenerate; warnings carry
/// the diagnostics. See [`TableRenderer::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// The rendered table, ending in a newline.
    pub text: String,
    /// Diagnostics recorded during the pass, in occurrence order.
    pub warnings: Vec<RenderWarning>,
}

/// Fixed-width ASCII table renderer over a borrowed flat buffer.
///
/// A `TableRenderer` is constructed once from a buffer, a title, column
/// labels, and a total character width; the geometry (rows, columns, column
/// width) is derived at construction and never revalidated. The buffer is
/// only ever read by computed index and must outlive the renderer.
///
/// # Examples
///
/// ```
/// use tablizer::{Arrangement, TableRenderer};
///
/// let data = [1, 2, 3, 4];
/// let labels = vec!["A".to_string(), "B".to_string()];
/// let table = TableRenderer::new(&data, "Data", labels, 13, Arrangement::RowMajor)?;
///
/// let output = table.render();
/// assert!(output.text.contains("|    1|    2|"));
/// assert!(output.warnings.is_empty());
/// # Ok::<(), tablizer::TablizerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TableRenderer<'a, T: Cell> {
    data: &'a [T],
    name: String,
    labels: Vec<String>,
    geometry: Geometry,
    arrangement: Arrangement,
    precision: usize,
}

impl<'a, T: Cell> TableRenderer<'a, T> {
    /// Creates a renderer and derives its geometry.
    ///
    /// # Parameters
    ///
    /// * `data` - Flat buffer of cell values, read-only, borrowed for `'a`
    /// * `name` - Title rendered in the banner
    /// * `labels` - Column labels; their count defines the column count
    /// * `table_width` - Total character width, borders included
    /// * `arrangement` - Row-major or column-major interpretation of `data`
    ///
    /// When `data.len()` is not a multiple of the column count, the trailing
    /// elements do not fill a row and are silently dropped from the layout.
    ///
    /// # Errors
    ///
    /// Validation fails fast, in order:
    ///
    /// - [`TablizerError::EmptyData`] when `data` is empty
    /// - [`TablizerError::NoColumns`] when `labels` is empty
    /// - [`TablizerError::ZeroWidth`] when `table_width` is zero
    /// - [`TablizerError::WidthTooSmall`] when the width cannot give every
    ///   column at least one content character
    /// - [`TablizerError::TitleTooWide`] when `name` is wider than the banner
    ///   content space (`table_width - 2`)
    ///
    /// # Examples
    ///
    /// ```
    /// use tablizer::{Arrangement, TableRenderer};
    ///
    /// let data = [1.5_f64, 2.5, 3.5, 4.5, 5.5, 6.5];
    /// let labels = vec!["X".to_string(), "Y".to_string()];
    /// let table = TableRenderer::new(&data, "Points", labels, 27, Arrangement::ColumnMajor)?;
    /// assert_eq!(table.rows(), 3);
    /// assert_eq!(table.column_width(), 12);
    /// # Ok::<(), tablizer::TablizerError>(())
    /// ```
    pub fn new(
        data: &'a [T],
        name: impl Into<String>,
        labels: Vec<String>,
        table_width: usize,
        arrangement: Arrangement,
    ) -> Result<Self> {
        if data.is_empty() {
            return Err(TablizerError::EmptyData);
        }

        if labels.is_empty() {
            return Err(TablizerError::NoColumns);
        }

        let geometry = Geometry::derive(data.len(), labels.len(), table_width)?;

        let name = name.into();
        if display_width(&name) + 2 > table_width {
            return Err(TablizerError::TitleTooWide {
                name,
                width: table_width,
            });
        }

        tracing::debug!(
            name = %name,
            rows = geometry.rows,
            cols = geometry.cols,
            column_width = geometry.column_width,
            ?arrangement,
            "table renderer constructed"
        );

        Ok(Self {
            data,
            name,
            labels,
            geometry,
            arrangement,
            precision: DEFAULT_PRECISION,
        })
    }

    /// Overrides the fixed decimal precision for numeric cells (default 8).
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Row count of the laid-out grid (`size / cols`, truncating).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.geometry.rows
    }

    /// Column count, defined by the number of labels.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.geometry.cols
    }

    /// Character width allotted to one data column.
    #[must_use]
    pub fn column_width(&self) -> usize {
        self.geometry.column_width
    }

    /// Renders the table into a fresh output buffer.
    ///
    /// Every call re-runs the full pipeline from scratch, so repeated calls
    /// return identical output and never mutate the source buffer.
    ///
    /// This method never fails: a formatting anomaly inside the pipeline is
    /// caught, logged at error level, and recorded as
    /// [`RenderWarning::Incomplete`]; the partially-built text plus trailing
    /// newline is still returned.
    #[must_use]
    pub fn render(&self) -> RenderOutput {
        let mut text = String::new();
        let mut warnings = Vec::new();

        if let Err(e) = self.write_table(&mut text, &mut warnings) {
            tracing::error!(table = %self.name, error = %e, "error while rendering table");
            warnings.push(RenderWarning::Incomplete {
                detail: e.to_string(),
            });
        }

        text.push('\n');
        RenderOutput { text, warnings }
    }

    /// Renders the table and returns just the text.
    ///
    /// Convenience over [`render`](Self::render) for callers that consume the
    /// warnings through the tracing channel instead.
    #[must_use]
    pub fn render_to_string(&self) -> String {
        self.render().text
    }

    /// Renders the table and writes it to standard output.
    ///
    /// Diagnostics go to the tracing channel; like [`render`](Self::render),
    /// this never fails.
    pub fn print(&self) {
        print!("{}", self.render().text);
    }

    fn write_table(&self, out: &mut String, warnings: &mut Vec<RenderWarning>) -> fmt::Result {
        components::write_banner(out, &self.name, self.geometry.table_width)?;
        components::write_column_header(out, &self.labels, &self.geometry)?;

        for row in 0..self.geometry.rows {
            components::write_row(
                out,
                self.data,
                row,
                &self.geometry,
                self.arrangement,
                self.precision,
                warnings,
            )?;
        }

        write_separator(out, self.geometry.table_width)
    }
}
