//! Learning color adjacency statistics from source images

/// Adjacency extraction from source pixel grids
pub mod training;
/// Directed color transition counts
pub mod transitions;
