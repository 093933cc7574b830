//! Markov-chain image synthesis from learned color adjacency statistics
//!
//! Source images are reduced to counts of directed (from-color → to-color)
//! neighbor pairs. New images are grown outward from a seed pixel through a
//! randomly prioritized frontier, each pixel sampled conditioned on one of its
//! already-colored neighbors.

#![forbid(unsafe_code)]

/// Frontier growth, weighted sampling and image synthesis
pub mod algorithm;
/// Transition statistics and training on source images
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Weighted selection over integer counts
pub mod math;
/// Colors, pixel grids and neighborhood utilities
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
