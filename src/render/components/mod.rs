//! Composable table section renderers.
//!
//! Each component renders one section of the table and appends to the shared
//! output buffer, in the pipeline order the renderer drives them:
//!
//! - [`banner`]: Title banner (border, centered title, border)
//! - [`header`]: `|`-delimited column labels plus separator
//! - [`row`]: Content rows with right-aligned cells and overflow notes

mod banner;
mod header;
mod row;

pub(crate) use banner::write_banner;
pub(crate) use header::write_column_header;
pub(crate) use row::write_row;
