//! Weighted color draws from a trained model

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::analysis::transitions::TransitionModel;
use crate::io::error::{AlgorithmError, Result, computation_error};
use crate::math::probability::roulette_select;
use crate::spatial::color::Color;

/// Seeded random source for every stochastic choice made during synthesis
///
/// Two samplers built from the same seed make identical choices when asked
/// the same questions in the same order.
pub struct ColorSampler {
    rng: StdRng,
}

impl ColorSampler {
    /// Create a deterministic sampler
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a to-color from the whole edge multiset
    ///
    /// Each edge is weighted by `count / total_pairs`, so colors that appear
    /// often as a neighbor are proportionally more likely.
    ///
    /// # Errors
    ///
    /// Returns `EmptyModel` if the model has no recorded pairs, or a
    /// `Computation` error if the cumulative scan falls through.
    pub fn pick_unconditioned(&mut self, model: &TransitionModel) -> Result<Color> {
        if model.is_empty() {
            return Err(AlgorithmError::EmptyModel);
        }

        let r = self.rng.random::<f64>();
        let weighted = model.edges().map(|(_, to, count)| (to, count));
        roulette_select(weighted, model.total_pairs(), r).ok_or_else(|| {
            computation_error(
                "unconditioned color draw",
                &format!("cumulative scan did not reach r = {r}"),
            )
        })
    }

    /// Draw the color following `from`
    ///
    /// Falls back to [`ColorSampler::pick_unconditioned`] when `from` has no
    /// outgoing edges.
    ///
    /// # Errors
    ///
    /// Returns `EmptyModel` when falling back on an empty model, or a
    /// `Computation` error if the cumulative scan falls through.
    pub fn pick_conditioned(&mut self, model: &TransitionModel, from: Color) -> Result<Color> {
        if !model.has_from(from) {
            return self.pick_unconditioned(model);
        }

        let targets = model.outgoing(from)?;
        let r = self.rng.random::<f64>();
        let weighted = targets.iter().map(|(&to, &count)| (to, count));
        roulette_select(weighted, model.out_degree(from), r).ok_or_else(|| {
            computation_error(
                "conditioned color draw",
                &format!("cumulative scan from {from} did not reach r = {r}"),
            )
        })
    }

    /// Pick one element uniformly, or `None` from an empty slice
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.rng.random_range(0..items.len())).copied()
    }

    /// Uniform integer in `0..bound` (0 when `bound` is 0)
    pub fn priority(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }
}
