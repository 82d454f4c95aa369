//! Layout layer: geometry derivation and buffer index mapping.
//!
//! This module answers the two questions every render pass asks: how big is
//! the grid (rows, columns, per-column width) and which flat buffer index
//! backs a given cell. Both depend only on the construction-time parameters,
//! so the whole layer is pure arithmetic with no rendering concerns.
//!
//! # Organization
//!
//! - [`geometry`]: [`Geometry`] derivation and [`Arrangement`] index mapping

pub mod geometry;

pub use geometry::{Arrangement, Geometry};
