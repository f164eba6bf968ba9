//! Comparison result type.

use serde::{Deserialize, Serialize};

/// Outcome of comparing two token sequences.
///
/// `index` and `distance` are `None` when `union == 0`, i.e. both sides were
/// empty. That case is undefined rather than an error, and callers decide
/// how to present it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Shared weight: Σ min counts, or aligned positions in positional mode.
    pub intersection: usize,
    /// Total weight: Σ max counts, or the longer length in positional mode.
    pub union: usize,
    /// `intersection / union`.
    pub index: Option<f64>,
    /// `1 - index`.
    pub distance: Option<f64>,
}

impl Comparison {
    pub fn from_components(intersection: usize, union: usize) -> Self {
        debug_assert!(intersection <= union);
        let index = jaccard_ratio(intersection, union);
        Self {
            intersection,
            union,
            index,
            distance: index.map(|i| 1.0 - i),
        }
    }

    /// `(intersection, union)`.
    pub fn components(&self) -> (usize, usize) {
        (self.intersection, self.union)
    }

    pub fn is_defined(&self) -> bool {
        self.union > 0
    }
}

/// `intersection / union`, or `None` for an empty union.
pub fn jaccard_ratio(intersection: usize, union: usize) -> Option<f64> {
    (union > 0).then(|| intersection as f64 / union as f64)
}
