//! Frontier-growth image synthesis
//!
//! Starting from a single seed pixel, the image grows outward through a
//! randomly prioritized frontier. Every pixel is colored by sampling the
//! model conditioned on one already-colored neighbor, so the growth order
//! decides which context is available at each step. Random priorities avoid
//! the scanline bias a raster or breadth-first order would introduce.

use log::debug;
use ndarray::Array2;

use crate::algorithm::frontier::{Frontier, PixelState};
use crate::algorithm::sampling::ColorSampler;
use crate::analysis::transitions::TransitionModel;
use crate::io::error::{AlgorithmError, Result, computation_error};
use crate::spatial::color::Color;
use crate::spatial::grid::{Coordinate, PixelGrid, in_bounds, neighbors};

/// How each pixel of the last run was colored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisStats {
    /// Pixels sampled from a neighbor's outgoing edges
    pub conditioned: usize,
    /// Pixels drawn from the whole model because no neighbor had data
    pub unconditioned: usize,
}

impl SynthesisStats {
    /// Total pixels colored
    pub const fn total(&self) -> usize {
        self.conditioned + self.unconditioned
    }
}

/// Center pixel of a `width` × `height` grid
pub const fn default_seed_position(width: usize, height: usize) -> Coordinate {
    (width / 2, height / 2)
}

/// Grows new images from a read-only transition model
pub struct Synthesizer<'m> {
    model: &'m TransitionModel,
    sampler: ColorSampler,
    stats: SynthesisStats,
}

impl<'m> Synthesizer<'m> {
    /// Create a synthesizer whose random choices derive from `seed`
    pub fn new(model: &'m TransitionModel, seed: u64) -> Self {
        Self::with_sampler(model, ColorSampler::new(seed))
    }

    /// Create a synthesizer around an existing sampler
    pub const fn with_sampler(model: &'m TransitionModel, sampler: ColorSampler) -> Self {
        Self {
            model,
            sampler,
            stats: SynthesisStats {
                conditioned: 0,
                unconditioned: 0,
            },
        }
    }

    /// Statistics of the most recent run
    pub const fn stats(&self) -> SynthesisStats {
        self.stats
    }

    /// Synthesize a `width` × `height` image grown from `seed`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` for a zero or overflowing size,
    /// `SeedOutOfBounds` if `seed` lies outside the grid, and `EmptyModel` if
    /// the model holds no pairs. All three are checked before any pixel is colored.
    pub fn synthesize(&mut self, width: usize, height: usize, seed: Coordinate) -> Result<PixelGrid> {
        self.synthesize_with_observer(width, height, seed, |_, _| {})
    }

    /// Same as [`Synthesizer::synthesize`], calling `observer` after each pixel is colored
    ///
    /// # Errors
    ///
    /// See [`Synthesizer::synthesize`]. A sampling invariant violation is
    /// reported as a `Computation` error.
    pub fn synthesize_with_observer<F>(
        &mut self,
        width: usize,
        height: usize,
        seed: Coordinate,
        mut observer: F,
    ) -> Result<PixelGrid>
    where
        F: FnMut(Coordinate, Color),
    {
        let pixel_count = validate_request(self.model, width, height, seed)?;
        self.stats = SynthesisStats::default();

        let mut canvas: Array2<Option<Color>> = Array2::from_elem((height, width), None);
        let mut frontier = Frontier::new(width, height);
        frontier.schedule(seed, 0);

        while let Some(position) = frontier.pop() {
            let color = self.color_from_neighbors(position, &canvas, &frontier)?;
            if let Some(slot) = canvas.get_mut([position.1, position.0]) {
                *slot = Some(color);
            }
            frontier.mark_colored(position);
            observer(position, color);

            for neighbor in neighbors(position, width, height) {
                if frontier.state(neighbor) == Some(PixelState::Unvisited) {
                    let priority = self.sampler.priority(pixel_count);
                    frontier.schedule(neighbor, priority);
                }
            }
        }

        debug!(
            "Synthesized {width}x{height}: {} conditioned, {} fallback draws",
            self.stats.conditioned, self.stats.unconditioned
        );

        finish_canvas(&canvas)
    }

    fn color_from_neighbors(
        &mut self,
        position: Coordinate,
        canvas: &Array2<Option<Color>>,
        frontier: &Frontier,
    ) -> Result<Color> {
        let (height, width) = canvas.dim();
        let context: Vec<Color> = neighbors(position, width, height)
            .filter(|&neighbor| frontier.is_colored(neighbor))
            .filter_map(|(x, y)| canvas.get([y, x]).copied().flatten())
            .filter(|&color| self.model.has_from(color))
            .collect();

        match self.sampler.choose(&context) {
            Some(from) => {
                self.stats.conditioned += 1;
                self.sampler.pick_conditioned(self.model, from)
            }
            None => {
                self.stats.unconditioned += 1;
                self.sampler.pick_unconditioned(self.model)
            }
        }
    }
}

fn validate_request(
    model: &TransitionModel,
    width: usize,
    height: usize,
    seed: Coordinate,
) -> Result<u64> {
    let pixel_count = width
        .checked_mul(height)
        .filter(|&count| count > 0)
        .ok_or(AlgorithmError::InvalidDimensions { width, height })?;
    if !in_bounds(seed, width, height) {
        return Err(AlgorithmError::SeedOutOfBounds {
            seed,
            dimensions: (width, height),
        });
    }
    if model.is_empty() {
        return Err(AlgorithmError::EmptyModel);
    }
    Ok(pixel_count as u64)
}

fn finish_canvas(canvas: &Array2<Option<Color>>) -> Result<PixelGrid> {
    let dim = canvas.dim();
    let pixels: Vec<Color> = canvas
        .iter()
        .copied()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| computation_error("synthesis", &"growth finished with uncolored pixels"))?;
    Array2::from_shape_vec(dim, pixels)
        .map(PixelGrid::from_array)
        .map_err(|e| computation_error("synthesis", &e))
}
