//! Directed, weighted color adjacency counts learned from source images
//!
//! Counts are stored, probabilities are derived on demand. Both maps are
//! ordered by color so that every scan over the model is reproducible.

use std::collections::BTreeMap;

use log::warn;

use crate::io::error::{AlgorithmError, Result};
use crate::math::probability::normalize_counts;
use crate::spatial::color::Color;

/// Outgoing edge counts for one from-color
pub type EdgeCounts = BTreeMap<Color, u64>;

/// Observed (from → to) color adjacencies with running totals
///
/// `out_degree[c]` always equals the sum of `edges[c]`, and `total_pairs`
/// equals the sum of all out-degrees. Stored counts are never zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionModel {
    edges: BTreeMap<Color, EdgeCounts>,
    out_degree: BTreeMap<Color, u64>,
    total_pairs: u64,
}

/// Size summary used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSummary {
    /// Colors with at least one outgoing edge
    pub from_colors: usize,
    /// Distinct (from, to) pairs
    pub distinct_edges: usize,
    /// Sum of all edge counts
    pub total_pairs: u64,
}

impl TransitionModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single observation of `from` next to `to`
    ///
    /// A model whose total has reached `u64::MAX` ignores the observation
    /// and logs a warning, leaving every count consistent.
    pub fn record_edge(&mut self, from: Color, to: Color) {
        if let Err(error) = self.record_edges(from, to, 1) {
            warn!("Dropping observation {from} -> {to}: {error}");
        }
    }

    /// Record `count` observations of `from` next to `to` at once
    ///
    /// A zero count is ignored so that no zero-weight edge is ever stored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if the edge count, the out-degree of
    /// `from` or the total would overflow. The model is left unchanged.
    pub fn record_edges(&mut self, from: Color, to: Color, count: u64) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        let overflow = || invalid_model(format!("adding {count} to edge {from} -> {to} overflows"));
        let edge_count = self.count(from, to).checked_add(count).ok_or_else(overflow)?;
        let out_degree = self.out_degree(from).checked_add(count).ok_or_else(overflow)?;
        let total_pairs = self.total_pairs.checked_add(count).ok_or_else(overflow)?;

        self.edges.entry(from).or_default().insert(to, edge_count);
        self.out_degree.insert(from, out_degree);
        self.total_pairs = total_pairs;
        Ok(())
    }

    /// Fold another model's counts into this one
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if any summed count would overflow, in
    /// which case this model is left unchanged.
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        let mut merged = self.clone();
        for (from, to, count) in other.edges() {
            merged.record_edges(from, to, count)?;
        }
        *self = merged;
        Ok(())
    }

    /// True iff `color` has at least one recorded outgoing edge
    pub fn has_from(&self, color: Color) -> bool {
        self.edges.contains_key(&color)
    }

    /// Outgoing edge counts for `color`
    ///
    /// # Errors
    ///
    /// Returns `UnknownColor` if `color` was never recorded as a from-color;
    /// guard with [`TransitionModel::has_from`].
    pub fn outgoing(&self, color: Color) -> Result<&EdgeCounts> {
        self.edges
            .get(&color)
            .ok_or(AlgorithmError::UnknownColor { color })
    }

    /// Sum of outgoing counts for `color` (0 if unknown)
    pub fn out_degree(&self, color: Color) -> u64 {
        self.out_degree.get(&color).copied().unwrap_or(0)
    }

    /// Sum of every edge count in the model
    pub const fn total_pairs(&self) -> u64 {
        self.total_pairs
    }

    /// True if nothing has been recorded
    pub const fn is_empty(&self) -> bool {
        self.total_pairs == 0
    }

    /// Count for a single (from, to) edge (0 if absent)
    pub fn count(&self, from: Color, to: Color) -> u64 {
        self.edges
            .get(&from)
            .and_then(|targets| targets.get(&to))
            .copied()
            .unwrap_or(0)
    }

    /// P(to | from), or 0 when `from` is unknown
    pub fn transition_probability(&self, from: Color, to: Color) -> f64 {
        let degree = self.out_degree(from);
        if degree == 0 {
            return 0.0;
        }
        self.count(from, to) as f64 / degree as f64
    }

    /// Conditional distribution over the to-colors of `from`, in to-color order
    ///
    /// Empty when `from` is unknown.
    pub fn transition_distribution(&self, from: Color) -> Vec<(Color, f64)> {
        let Some(targets) = self.edges.get(&from) else {
            return Vec::new();
        };
        let counts: Vec<u64> = targets.values().copied().collect();
        targets
            .keys()
            .copied()
            .zip(normalize_counts(&counts))
            .collect()
    }

    /// P(from, to) over the whole pair multiset, or 0 for an empty model
    pub fn pair_probability(&self, from: Color, to: Color) -> f64 {
        if self.total_pairs == 0 {
            return 0.0;
        }
        self.count(from, to) as f64 / self.total_pairs as f64
    }

    /// From-colors in ascending order
    pub fn from_colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.edges.keys().copied()
    }

    /// Every `(from, to, count)` triple, ordered by from-color then to-color
    pub fn edges(&self) -> impl Iterator<Item = (Color, Color, u64)> + '_ {
        self.edges.iter().flat_map(|(&from, targets)| {
            targets.iter().map(move |(&to, &count)| (from, to, count))
        })
    }

    /// Size summary
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            from_colors: self.edges.len(),
            distinct_edges: self.edges.values().map(BTreeMap::len).sum(),
            total_pairs: self.total_pairs,
        }
    }

    /// Verify the count invariants
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` describing the first violated invariant.
    pub fn check_invariants(&self) -> Result<()> {
        let mut grand_total = 0u64;
        for (from, targets) in &self.edges {
            if targets.is_empty() {
                return Err(invalid_model(format!("color {from} has no outgoing edges")));
            }
            if let Some((to, _)) = targets.iter().find(|&(_, &count)| count == 0) {
                return Err(invalid_model(format!("edge {from} -> {to} has zero count")));
            }
            let sum = targets
                .values()
                .try_fold(0u64, |acc, &count| acc.checked_add(count))
                .ok_or_else(|| invalid_model(format!("edge counts of {from} overflow")))?;
            if sum != self.out_degree(*from) {
                return Err(invalid_model(format!(
                    "out-degree of {from} is {} but its edges sum to {sum}",
                    self.out_degree(*from)
                )));
            }
            grand_total = grand_total
                .checked_add(sum)
                .ok_or_else(|| invalid_model("total of all edge counts overflows".to_string()))?;
        }
        if self.out_degree.len() != self.edges.len() {
            return Err(invalid_model(
                "out-degree table and edge table disagree on from-colors".to_string(),
            ));
        }
        if grand_total != self.total_pairs {
            return Err(invalid_model(format!(
                "total pairs is {} but edges sum to {grand_total}",
                self.total_pairs
            )));
        }
        Ok(())
    }
}

const fn invalid_model(reason: String) -> AlgorithmError {
    AlgorithmError::InvalidSourceData { reason }
}
