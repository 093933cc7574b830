//! Spatial data structures
//!
//! This module contains:
//! - Canonical RGBA colors
//! - Dense pixel grids and the source/sink boundary traits
//! - 4-connected neighborhood iteration

/// Canonical color keys
pub mod color;
/// Pixel grids and neighborhood utilities
pub mod grid;

pub use color::Color;
pub use grid::{Coordinate, PixelGrid, PixelSink, PixelSource};
