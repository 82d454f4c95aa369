//! Domain layer for the tablizer library.
//!
//! This module contains the core types the rest of the crate is built on,
//! independent of layout or rendering concerns: the central error type and the
//! capability trait for cell values.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`value`]: The [`Cell`] capability trait and its implementations
//!
//! # Examples
//!
//! ```
//! use tablizer::{Cell, Result};
//!
//! fn format_reading(value: f64) -> Result<String> {
//!     Ok(value.format_cell(8))
//! }
//! ```

pub mod error;
pub mod value;

pub use error::{Result, TablizerError};
pub use value::Cell;
