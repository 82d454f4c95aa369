//! Tablizer: a fixed-width ASCII table renderer for flat data buffers.
//!
//! Tablizer lays a one-dimensional buffer of homogeneous values out as a
//! rectangular ASCII-art table: a title banner, a column header, and bordered
//! content rows, emitted as a single string. The buffer is borrowed and only
//! ever read; the column labels define the column count, and the row count
//! and per-column width are derived from the buffer size and the requested
//! total width.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Render Layer (render/)                             │  ← Entry point
//! │  - TableRenderer construction & validation          │
//! │  - Section components (banner, header, rows)        │
//! │  - Overflow degradation & warnings                  │
//! └─────────────────────────────────────────────────────┘
//!           │                           │
//! ┌───────────────────┐       ┌───────────────────────┐
//! │ Layout Layer      │       │ Domain Layer          │
//! │ (layout/)         │       │ (domain/)             │
//! │ - Geometry        │       │ - Cell capability     │
//! │ - Index mapping   │       │ - Error types         │
//! └───────────────────┘       └───────────────────────┘
//!                     │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Core types (the [`Cell`] capability, errors)
//! - [`layout`]: Geometry derivation and flat-buffer index mapping
//! - [`render`]: The render pipeline and its output types
//! - [`observability`]: Opt-in tracing subscriber setup
//!
//! # Layout
//!
//! For a buffer of `size` values and `cols` labels, the grid has
//! `rows = size / cols` rows (integer truncation; trailing elements that do
//! not fill a row are dropped) and each column gets
//! `column_width = (table_width - (cols + 1)) / cols` characters, reserving
//! one border character per column boundary plus one. The same buffer can be
//! read in two arrangements:
//!
//! - [`Arrangement::RowMajor`]: consecutive elements fill rows
//! - [`Arrangement::ColumnMajor`]: consecutive elements fill columns
//!
//! # Example
//!
//! ```rust
//! use tablizer::{Arrangement, TableRenderer};
//!
//! let data = [1, 2, 3, 4];
//! let labels = vec!["A".to_string(), "B".to_string()];
//!
//! let table = TableRenderer::new(&data, "Data", labels, 13, Arrangement::RowMajor)?;
//! print!("{}", table.render_to_string());
//! # Ok::<(), tablizer::TablizerError>(())
//! ```
//!
//! Producing:
//!
//! ```text
//! +-----------+
//! |   Data    |
//! +-----------+
//! |  A  |  B  |
//! +-----------+
//! |    1|    2|
//! |    3|    4|
//! +-----------+
//! ```
//!
//! # Key Design Decisions
//!
//! ## Never Fail Across the Render Boundary
//!
//! Construction validates everything a caller can get wrong (empty buffer,
//! empty labels, widths that cannot hold the columns or the title) and fails
//! fast with a [`TablizerError`]. After that, rendering never returns an
//! error: cell overflows degrade to the type's default value plus an
//! annotated note, and pipeline anomalies are downgraded to
//! [`RenderWarning`] diagnostics attached to the always-populated output.
//!
//! ## Fresh Buffer Per Render
//!
//! Every [`TableRenderer::render`] call builds its output from scratch, so
//! repeated calls are idempotent and instances carry no accumulation state
//! between passes.

pub mod domain;
pub mod layout;
pub mod observability;
pub mod render;

pub use domain::{Cell, Result, TablizerError};
pub use layout::{Arrangement, Geometry};
pub use render::{RenderOutput, RenderWarning, TableRenderer};
