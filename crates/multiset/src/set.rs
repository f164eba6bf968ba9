//! Plain set Jaccard over any hashable items.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// `|A ∩ B| / |A ∪ B|`, `None` when both sets are empty.
pub fn set_jaccard<T, H>(a: &HashSet<T, H>, b: &HashSet<T, H>) -> Option<f64>
where
    T: Eq + Hash,
    H: BuildHasher,
{
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    (union > 0).then(|| intersection as f64 / union as f64)
}

/// `1 - set_jaccard(a, b)`.
pub fn set_jaccard_distance<T, H>(a: &HashSet<T, H>, b: &HashSet<T, H>) -> Option<f64>
where
    T: Eq + Hash,
    H: BuildHasher,
{
    set_jaccard(a, b).map(|index| 1.0 - index)
}
