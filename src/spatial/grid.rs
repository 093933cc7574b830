//! Dense pixel grids and the boundary traits used by training and synthesis
//!
//! Coordinates are `(x, y)` with `x` in `0..width` and `y` in `0..height`.
//! Storage is row-major (`[y, x]`) to match how images are laid out.

use ndarray::Array2;

use crate::io::configuration::NEIGHBOR_OFFSETS;
use crate::spatial::color::Color;

/// Pixel coordinate as `(x, y)`
pub type Coordinate = (usize, usize);

/// Read access to a rectangular grid of canonical colors
pub trait PixelSource {
    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Color at `(x, y)`, or `None` outside the grid
    fn pixel(&self, x: usize, y: usize) -> Option<Color>;
}

/// Write access to a rectangular grid of colors
pub trait PixelSink {
    /// Store `color` at `(x, y)`; returns false when the coordinate is outside the grid
    fn put_pixel(&mut self, x: usize, y: usize, color: Color) -> bool;
}

/// Width × height grid of colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Array2<Color>,
}

impl PixelGrid {
    /// Create a grid with every pixel set to `fill`
    pub fn filled(width: usize, height: usize, fill: Color) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), fill),
        }
    }

    /// Build a grid from rows of colors
    ///
    /// Returns `None` if the rows are ragged.
    pub fn from_rows(rows: &[Vec<Color>]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let flat: Vec<Color> = rows.iter().flatten().copied().collect();
        Array2::from_shape_vec((height, width), flat)
            .ok()
            .map(|pixels| Self { pixels })
    }

    /// Wrap an existing row-major array (`[y, x]`)
    pub const fn from_array(pixels: Array2<Color>) -> Self {
        Self { pixels }
    }

    /// Iterate over `(x, y, color)` in row-major order
    pub fn enumerate(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.pixels
            .indexed_iter()
            .map(|((y, x), &color)| (x, y, color))
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True for a grid with zero width or height
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

impl PixelSource for PixelGrid {
    fn width(&self) -> usize {
        self.pixels.ncols()
    }

    fn height(&self) -> usize {
        self.pixels.nrows()
    }

    fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        self.pixels.get([y, x]).copied()
    }
}

impl PixelSink for PixelGrid {
    fn put_pixel(&mut self, x: usize, y: usize, color: Color) -> bool {
        self.pixels.get_mut([y, x]).map(|slot| *slot = color).is_some()
    }
}

/// Check whether `(x, y)` lies inside a `width` × `height` grid
pub const fn in_bounds(position: Coordinate, width: usize, height: usize) -> bool {
    position.0 < width && position.1 < height
}

/// In-bounds 4-connected neighbors of `position`, in up, right, down, left order
pub fn neighbors(
    position: Coordinate,
    width: usize,
    height: usize,
) -> impl Iterator<Item = Coordinate> {
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let x = position.0.checked_add_signed(dx)?;
        let y = position.1.checked_add_signed(dy)?;
        in_bounds((x, y), width, height).then_some((x, y))
    })
}
