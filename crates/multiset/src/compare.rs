//! Multiset and positional comparison of token sequences.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::counts::TokenCounts;
use crate::score::Comparison;

/// How two token sequences are matched against each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    /// Bag of tokens; repeated tokens count with their multiplicity.
    #[default]
    Multiset,
    /// Bag of tokens with each distinct token counted once (set Jaccard).
    Distinct,
    /// Token `i` of one side only matches token `i` of the other.
    Positional,
}

/// Compare two token sequences as multisets, or index by index when
/// `respect_positions` is set.
pub fn compare<S: AsRef<str>>(
    tokens_a: &[S],
    tokens_b: &[S],
    respect_positions: bool,
) -> Comparison {
    let mode = if respect_positions {
        ComparisonMode::Positional
    } else {
        ComparisonMode::Multiset
    };
    compare_with(tokens_a, tokens_b, mode)
}

/// Compare two token sequences under an explicit [`ComparisonMode`].
pub fn compare_with<S: AsRef<str>>(
    tokens_a: &[S],
    tokens_b: &[S],
    mode: ComparisonMode,
) -> Comparison {
    let (intersection, union) = match mode {
        ComparisonMode::Multiset => multiset_components(tokens_a, tokens_b),
        ComparisonMode::Distinct => distinct_components(tokens_a, tokens_b),
        ComparisonMode::Positional => positional_components(tokens_a, tokens_b),
    };
    trace!(
        ?mode,
        len_a = tokens_a.len(),
        len_b = tokens_b.len(),
        intersection,
        union,
        "compare"
    );
    Comparison::from_components(intersection, union)
}

/// `(Σ min(countA, countB), Σ max(countA, countB))`.
pub fn multiset_components<S: AsRef<str>>(tokens_a: &[S], tokens_b: &[S]) -> (usize, usize) {
    let a = TokenCounts::from_tokens(tokens_a);
    let b = TokenCounts::from_tokens(tokens_b);
    (a.intersection_size(&b), a.union_size(&b))
}

/// `(|A ∩ B|, |A ∪ B|)` over distinct tokens.
pub fn distinct_components<S: AsRef<str>>(tokens_a: &[S], tokens_b: &[S]) -> (usize, usize) {
    let a = TokenCounts::distinct(tokens_a);
    let b = TokenCounts::distinct(tokens_b);
    (a.intersection_size(&b), a.union_size(&b))
}

/// `(#{i : a[i] == b[i]}, max(len a, len b))`. Positions past the end of the
/// shorter sequence never match.
pub fn positional_components<S: AsRef<str>>(tokens_a: &[S], tokens_b: &[S]) -> (usize, usize) {
    let intersection = tokens_a
        .iter()
        .zip(tokens_b.iter())
        .filter(|&(a, b)| a.as_ref() == b.as_ref())
        .count();
    (intersection, tokens_a.len().max(tokens_b.len()))
}
