//! Token multisets.

use fxhash::FxHashMap;

/// Occurrence counts of the tokens of one sequence, borrowing the tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCounts<'a> {
    counts: FxHashMap<&'a str, usize>,
    total: usize,
}

impl<'a> TokenCounts<'a> {
    /// Count every occurrence.
    pub fn from_tokens<S: AsRef<str>>(tokens: &'a [S]) -> Self {
        let mut counts = FxHashMap::default();
        counts.reserve(tokens.len());
        for token in tokens {
            *counts.entry(token.as_ref()).or_insert(0) += 1;
        }
        Self {
            counts,
            total: tokens.len(),
        }
    }

    /// Count each distinct token once (set semantics).
    pub fn distinct<S: AsRef<str>>(tokens: &'a [S]) -> Self {
        let mut counts = FxHashMap::default();
        for token in tokens {
            counts.insert(token.as_ref(), 1);
        }
        let total = counts.len();
        Self { counts, total }
    }

    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens.
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.counts.iter().map(|(token, count)| (*token, *count))
    }

    /// Σ min(countA, countB) over tokens present in both.
    pub fn intersection_size(&self, other: &TokenCounts<'_>) -> usize {
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .map(|(token, &count)| count.min(large.count(token)))
            .sum()
    }

    /// Σ max(countA, countB) over tokens present in either.
    ///
    /// Equal to `total_a + total_b - intersection`.
    pub fn union_size(&self, other: &TokenCounts<'_>) -> usize {
        self.total + other.total - self.intersection_size(other)
    }
}
