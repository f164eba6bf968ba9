//! TF-IDF weighted Jaccard.
//!
//! Each side is reduced to relative term frequencies, and every token's
//! min/max contribution is scaled by its inverse document frequency over a
//! caller-supplied corpus:
//!
//! ```text
//! J_w(A, B) = Σ idf(t) · min(tf_A(t), tf_B(t)) / Σ idf(t) · max(tf_A(t), tf_B(t))
//! ```
//!
//! Tokens absent from the IDF table weigh `1.0`.

use fxhash::{FxHashMap, FxHashSet};

use crate::counts::TokenCounts;

/// Relative frequency of each token: `count / len`.
pub fn term_frequencies<S: AsRef<str>>(tokens: &[S]) -> FxHashMap<String, f64> {
    let counts = TokenCounts::from_tokens(tokens);
    let total = counts.total().max(1) as f64;
    counts
        .iter()
        .map(|(token, count)| (token.to_owned(), count as f64 / total))
        .collect()
}

/// Smoothed IDF over a corpus of token sequences:
/// `ln((1 + N) / (1 + df)) + 1`.
pub fn inverse_document_frequencies<D, S>(corpus: &[D]) -> FxHashMap<String, f64>
where
    D: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut doc_freq: FxHashMap<&str, usize> = FxHashMap::default();
    for doc in corpus {
        let distinct: FxHashSet<&str> = doc.as_ref().iter().map(AsRef::as_ref).collect();
        for token in distinct {
            *doc_freq.entry(token).or_insert(0) += 1;
        }
    }

    let n = corpus.len() as f64;
    doc_freq
        .into_iter()
        .map(|(token, df)| {
            let idf = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
            (token.to_owned(), idf)
        })
        .collect()
}

/// Weighted Jaccard of two token sequences, `None` when both are empty.
pub fn weighted_jaccard<S: AsRef<str>>(
    tokens_a: &[S],
    tokens_b: &[S],
    idf: &FxHashMap<String, f64>,
) -> Option<f64> {
    let tf_a = term_frequencies(tokens_a);
    let tf_b = term_frequencies(tokens_b);

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    let all_tokens: FxHashSet<&String> = tf_a.keys().chain(tf_b.keys()).collect();
    for token in all_tokens {
        let weight = idf.get(token).copied().unwrap_or(1.0);
        let a = tf_a.get(token).copied().unwrap_or(0.0);
        let b = tf_b.get(token).copied().unwrap_or(0.0);
        numerator += weight * a.min(b);
        denominator += weight * a.max(b);
    }

    (denominator > 0.0).then(|| numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn tf_is_relative() {
        let tf = term_frequencies(&["a", "a", "b", "c"]);
        assert!(close(tf["a"], 0.5));
        assert!(close(tf["b"], 0.25));
    }

    #[test]
    fn tf_of_empty_is_empty() {
        let empty: [&str; 0] = [];
        assert!(term_frequencies(&empty).is_empty());
    }

    #[test]
    fn idf_smoothing() {
        let corpus = vec![vec!["a", "b"], vec!["a"], vec!["a", "c", "c"]];
        let idf = inverse_document_frequencies(&corpus);
        // "a" appears in every document: ln(4/4) + 1.
        assert!(close(idf["a"], 1.0));
        // "c" appears once even though it repeats: ln(4/2) + 1.
        assert!(close(idf["c"], (2.0f64).ln() + 1.0));
    }

    #[test]
    fn identical_sequences_score_one() {
        let tokens = ["x", "y", "y"];
        let idf = FxHashMap::default();
        assert_eq!(weighted_jaccard(&tokens, &tokens, &idf), Some(1.0));
    }

    #[test]
    fn empty_sequences_are_undefined() {
        let empty: [&str; 0] = [];
        assert_eq!(weighted_jaccard(&empty, &empty, &FxHashMap::default()), None);
    }

    #[test]
    fn rare_tokens_dominate() {
        let corpus = vec![
            vec!["the", "cat"],
            vec!["the", "dog"],
            vec!["the", "bird"],
        ];
        let idf = inverse_document_frequencies(&corpus);

        // Sharing the common word scores lower than sharing the rare one.
        let common = weighted_jaccard(&["the", "cat"], &["the", "dog"], &idf).unwrap();
        let rare = weighted_jaccard(&["a", "cat"], &["b", "cat"], &idf).unwrap();
        assert!(rare > common, "rare={rare} common={common}");
    }

    #[test]
    fn unweighted_matches_tf_overlap() {
        // tf_a = {a: .5, b: .5}, tf_b = {a: 1}; num = .5, den = 1 + .5
        let score = weighted_jaccard(&["a", "b"], &["a"], &FxHashMap::default()).unwrap();
        assert!(close(score, 0.5 / 1.5));
    }
}
