//! Rendering layer with component-based architecture.
//!
//! This module turns a constructed renderer into its textual table form. The
//! top-level [`TableRenderer`] drives a fixed pipeline of section components,
//! each appending to a shared output buffer:
//!
//! ```text
//! TableRenderer::render → banner → column header → rows → separator → RenderOutput
//! ```
//!
//! # Modules
//!
//! - [`table`]: The renderer, its construction contract, and output types
//! - `components`: Composable section renderers (banner, header, rows)
//! - `helpers`: Shared rendering utilities (centering, separators, widths)

pub(crate) mod components;
pub(crate) mod helpers;
pub mod table;

pub use table::{RenderOutput, RenderWarning, TableRenderer};
