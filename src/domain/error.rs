//! Error types for the tablizer library.
//!
//! This module defines the centralized error type [`TablizerError`] and a type alias
//! [`Result`] for convenient error handling throughout the library. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Every variant is a configuration error: it is detected synchronously while a
//! [`crate::TableRenderer`] is being constructed and prevents use of the instance.
//! Rendering itself never fails through this type; see
//! [`crate::render::RenderWarning`] for the diagnostics a render call can attach
//! to its output.

use thiserror::Error;

/// The main error type for tablizer operations.
///
/// This enum consolidates the precondition failures that can occur while building
/// a [`crate::TableRenderer`]. These are the only errors a caller should branch on
/// programmatically; anything that goes wrong after construction is downgraded to
/// a diagnostic instead (see [`crate::render::RenderWarning`]).
///
/// # Examples
///
/// ```
/// use tablizer::{Arrangement, TableRenderer, TablizerError};
///
/// let data: &[i32] = &[];
/// let err = TableRenderer::new(data, "Empty", vec!["A".to_string()], 13, Arrangement::RowMajor)
///     .unwrap_err();
/// assert_eq!(err, TablizerError::EmptyData);
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TablizerError {
    /// The data buffer holds no elements.
    ///
    /// A borrowed slice cannot be null in safe Rust, so the null-pointer and
    /// zero-size preconditions collapse into this single check.
    #[error("data buffer cannot be empty")]
    EmptyData,

    /// No column labels were supplied.
    ///
    /// The label count defines the column count, so an empty label list leaves
    /// the table without a geometry.
    #[error("column names vector cannot be empty")]
    NoColumns,

    /// The requested table width is zero.
    #[error("table width cannot be zero")]
    ZeroWidth,

    /// The requested table width cannot fit the columns and their borders.
    ///
    /// Each column needs at least one content character plus its border, so a
    /// table with `cols` columns needs a width of at least `2 * cols + 1`.
    #[error("table width {width} cannot fit {cols} columns with their borders")]
    WidthTooSmall { width: usize, cols: usize },

    /// The title is wider than the banner row can hold.
    ///
    /// The banner frames the title between two `|` characters, leaving
    /// `table_width - 2` characters of content space.
    #[error("title {name:?} does not fit in table width {width}")]
    TitleTooWide { name: String, width: usize },
}

/// A specialized `Result` type for tablizer operations.
///
/// This is a type alias for `std::result::Result<T, TablizerError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, TablizerError>;
