/// Randomized priority frontier and per-pixel growth state
pub mod frontier;
/// Weighted color draws from a trained model
pub mod sampling;
/// Frontier-growth image synthesis
pub mod synthesis;
