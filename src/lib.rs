//! Workspace umbrella crate for multiset Jaccard text comparison.
//!
//! This crate stitches the tokenizer and the multiset comparator together so
//! callers can compare two texts with a single configuration value.
//!
//! ```rust
//! use jaccard::{jaccard_text, JaccardConfig, TokenizeConfig};
//!
//! let cfg = JaccardConfig::new(TokenizeConfig::words());
//! let result = jaccard_text("good good day", "good day", &cfg).unwrap();
//! assert_eq!(result.components(), (2, 3));
//! ```

pub mod config;

pub use multiset::{
    compare, compare_with, inverse_document_frequencies, set_jaccard, set_jaccard_distance,
    term_frequencies, weighted_jaccard, Comparison, ComparisonMode, TokenCounts,
};
pub use tokenizer::{
    ngrams, tokenize, tokenize_with, CustomTokenizer, HookError, Lemmatize, Lemmatizer,
    TokenMode, Tokenize, TokenizeConfig, TokenizeError, Tokenization,
};

pub use crate::config::{ConfigLoadError, JaccardFileConfig};

use std::time::Instant;

use tracing::{debug, Level};

/// Everything needed to compare two texts: how to tokenize them and how to
/// match the resulting tokens.
#[derive(Debug, Clone, Default)]
pub struct JaccardConfig {
    /// Built-in pipeline or caller tokenizer, never both.
    pub tokenization: Tokenization,
    /// Match tokens index by index instead of as multisets.
    pub respect_positions: bool,
    /// Count each distinct token once. Ignored when `respect_positions` is set.
    pub distinct_tokens: bool,
}

impl JaccardConfig {
    pub fn new(tokenization: impl Into<Tokenization>) -> Self {
        Self {
            tokenization: tokenization.into(),
            ..Self::default()
        }
    }

    pub fn with_positions(mut self, respect_positions: bool) -> Self {
        self.respect_positions = respect_positions;
        self
    }

    pub fn with_distinct_tokens(mut self, distinct_tokens: bool) -> Self {
        self.distinct_tokens = distinct_tokens;
        self
    }

    pub fn comparison_mode(&self) -> ComparisonMode {
        if self.respect_positions {
            ComparisonMode::Positional
        } else if self.distinct_tokens {
            ComparisonMode::Distinct
        } else {
            ComparisonMode::Multiset
        }
    }

    /// Tokens this configuration produces for `text`.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        tokenize(text, &self.tokenization)
    }
}

/// Tokenize both texts and compare them. Returns intersection, union, index
/// and distance together.
pub fn jaccard_text(
    text_a: &str,
    text_b: &str,
    cfg: &JaccardConfig,
) -> Result<Comparison, TokenizeError> {
    let start = Instant::now();
    let span = tracing::span!(
        Level::DEBUG,
        "jaccard.text",
        mode = ?cfg.comparison_mode(),
        len_a = text_a.len(),
        len_b = text_b.len()
    );
    let _guard = span.enter();

    let tokens_a = cfg.tokenize(text_a)?;
    let tokens_b = cfg.tokenize(text_b)?;
    let result = compare_with(&tokens_a, &tokens_b, cfg.comparison_mode());

    debug!(
        tokens_a = tokens_a.len(),
        tokens_b = tokens_b.len(),
        intersection = result.intersection,
        union = result.union,
        elapsed_micros = start.elapsed().as_micros(),
        "jaccard_success"
    );
    Ok(result)
}

/// `(intersection, union)` for two texts.
pub fn jaccard_components_text(
    text_a: &str,
    text_b: &str,
    cfg: &JaccardConfig,
) -> Result<(usize, usize), TokenizeError> {
    Ok(jaccard_text(text_a, text_b, cfg)?.components())
}

/// Jaccard index of two texts; `Ok(None)` when both tokenize to nothing.
pub fn jaccard_index_text(
    text_a: &str,
    text_b: &str,
    cfg: &JaccardConfig,
) -> Result<Option<f64>, TokenizeError> {
    Ok(jaccard_text(text_a, text_b, cfg)?.index)
}

/// Jaccard distance (`1 - index`) of two texts; `Ok(None)` when both
/// tokenize to nothing.
pub fn jaccard_distance_text(
    text_a: &str,
    text_b: &str,
    cfg: &JaccardConfig,
) -> Result<Option<f64>, TokenizeError> {
    Ok(jaccard_text(text_a, text_b, cfg)?.distance)
}

/// TF-IDF weighted Jaccard of two texts. IDF weights come from `corpus`,
/// tokenized with the same configuration; include both texts in it for the
/// usual setup. Comparison-mode options do not apply here.
pub fn weighted_jaccard_text<S: AsRef<str>>(
    text_a: &str,
    text_b: &str,
    corpus: &[S],
    cfg: &JaccardConfig,
) -> Result<Option<f64>, TokenizeError> {
    let documents = corpus
        .iter()
        .map(|doc| cfg.tokenize(doc.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let idf = inverse_document_frequencies(&documents);

    let tokens_a = cfg.tokenize(text_a)?;
    let tokens_b = cfg.tokenize(text_b)?;
    Ok(weighted_jaccard(&tokens_a, &tokens_b, &idf))
}
