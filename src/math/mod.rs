//! Mathematical utilities for the algorithm

/// Weighted random selection over integer counts
pub mod probability;
