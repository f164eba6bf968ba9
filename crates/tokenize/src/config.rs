//! Configuration types for the tokenization pipeline.
//!
//! [`TokenizeConfig`] drives the built-in pipeline. [`Tokenization`] selects
//! between that pipeline and a caller-supplied [`CustomTokenizer`]; making it
//! an enum means the two paths can never be combined.
//!
//! # Examples
//!
//! ## Default configuration
//!
//! ```rust
//! use tokenizer::{TokenMode, TokenizeConfig};
//!
//! let config = TokenizeConfig::default();
//! assert_eq!(config.mode, TokenMode::Char);
//! assert!(!config.lowercase);
//! assert!(config.ngram_size.is_none());
//! ```
//!
//! ## Word bigrams over normalized text
//!
//! ```rust
//! use tokenizer::{TokenMode, TokenizeConfig};
//!
//! let config = TokenizeConfig::new()
//!     .with_mode(TokenMode::Word)
//!     .with_lowercase(true)
//!     .with_strip_punctuation(true)
//!     .with_ngram_size(2);
//! assert!(config.validate().is_ok());
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenizeError;
use crate::hooks::{CustomTokenizer, Lemmatizer};
use crate::lexicon::{StopWords, SynonymTable};

/// Unit of tokenization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenMode {
    /// One token per character.
    #[default]
    Char,
    /// One token per whitespace-delimited word.
    Word,
}

impl TokenMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenMode::Char => "char",
            TokenMode::Word => "word",
        }
    }

    /// Separator placed between the members of an n-gram.
    ///
    /// The empty char-mode joiner assumes one char per token. A lemmatizer or
    /// synonym that widens a token can make distinct windows collide:
    /// `["ab", "c"]` and `["a", "bc"]` both join to `"abc"`.
    pub fn ngram_joiner(self) -> &'static str {
        match self {
            TokenMode::Char => "",
            TokenMode::Word => " ",
        }
    }
}

impl fmt::Display for TokenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenMode {
    type Err = TokenizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "char" => Ok(TokenMode::Char),
            "word" => Ok(TokenMode::Word),
            other => Err(TokenizeError::InvalidConfig(format!(
                "mode must be 'char' or 'word' (got '{other}')"
            ))),
        }
    }
}

/// Options of the built-in tokenization pipeline.
///
/// Every field has a serde default, so a partial YAML or JSON document is
/// enough to describe a configuration:
///
/// ```json
/// {
///   "mode": "word",
///   "lowercase": true,
///   "stop_words": ["loyal"],
///   "synonyms": { "dog": "canin" }
/// }
/// ```
///
/// The lemmatizer is a code hook and is never serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizeConfig {
    /// Unit of tokenization. Defaults to [`TokenMode::Char`].
    pub mode: TokenMode,

    /// Fold the whole text to lowercase before splitting.
    pub lowercase: bool,

    /// In char mode, keep whitespace characters as tokens.
    ///
    /// Ignored in word mode, where whitespace is the delimiter.
    pub keep_whitespace: bool,

    /// Remove ASCII punctuation (``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``) from
    /// the whole text before splitting.
    ///
    /// Removal does not insert a delimiter: `"l'auto"` becomes `"lauto"`.
    pub strip_punctuation: bool,

    /// Enable the bundled French/English stop-word list.
    pub use_default_stopwords: bool,

    /// Additional stop-words, unioned with the bundled list when both are on.
    ///
    /// Matching is exact and case-sensitive; supply lowercase words when
    /// `lowercase` is enabled.
    pub stop_words: BTreeSet<String>,

    /// Drop one trailing `s` from tokens longer than one character.
    ///
    /// This is a heuristic, not a lemmatizer: `"bus"` becomes `"bu"`.
    pub normalize_plural: bool,

    /// Enable the bundled synonym table.
    pub use_default_synonyms: bool,

    /// Token → representative. Wins over the bundled table on the same key.
    pub synonyms: BTreeMap<String, String>,

    /// Regroup tokens into sliding windows of this many tokens.
    ///
    /// `None` and `Some(1)` both mean unigrams. `Some(0)` is rejected.
    pub ngram_size: Option<usize>,

    /// Per-token hook applied after plural normalization.
    #[serde(skip)]
    pub lemmatizer: Option<Lemmatizer>,
}

impl TokenizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Word-mode configuration with everything else at its default.
    pub fn words() -> Self {
        Self::default().with_mode(TokenMode::Word)
    }

    pub fn with_mode(mut self, mode: TokenMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_keep_whitespace(mut self, keep_whitespace: bool) -> Self {
        self.keep_whitespace = keep_whitespace;
        self
    }

    pub fn with_strip_punctuation(mut self, strip_punctuation: bool) -> Self {
        self.strip_punctuation = strip_punctuation;
        self
    }

    pub fn with_default_stopwords(mut self, enabled: bool) -> Self {
        self.use_default_stopwords = enabled;
        self
    }

    /// Replace the custom stop-word set.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_normalize_plural(mut self, enabled: bool) -> Self {
        self.normalize_plural = enabled;
        self
    }

    pub fn with_default_synonyms(mut self, enabled: bool) -> Self {
        self.use_default_synonyms = enabled;
        self
    }

    /// Replace the custom synonym map.
    pub fn with_synonyms<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.synonyms = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    pub fn with_ngram_size(mut self, n: usize) -> Self {
        self.ngram_size = Some(n);
        self
    }

    pub fn with_lemmatizer(mut self, lemmatizer: Lemmatizer) -> Self {
        self.lemmatizer = Some(lemmatizer);
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), TokenizeError> {
        if self.ngram_size == Some(0) {
            return Err(TokenizeError::InvalidConfig(
                "ngram_size must be >= 1".into(),
            ));
        }
        Ok(())
    }

    pub fn stop_word_set(&self) -> StopWords<'_> {
        StopWords::new(self.use_default_stopwords, &self.stop_words)
    }

    pub fn synonym_table(&self) -> SynonymTable<'_> {
        SynonymTable::new(self.use_default_synonyms, &self.synonyms)
    }
}

/// The single active tokenization path.
#[derive(Debug, Clone)]
pub enum Tokenization {
    /// Built-in pipeline driven by [`TokenizeConfig`].
    Pipeline(TokenizeConfig),
    /// Caller-owned tokenization; no built-in option applies.
    Custom(CustomTokenizer),
}

impl Default for Tokenization {
    fn default() -> Self {
        Tokenization::Pipeline(TokenizeConfig::default())
    }
}

impl From<TokenizeConfig> for Tokenization {
    fn from(cfg: TokenizeConfig) -> Self {
        Tokenization::Pipeline(cfg)
    }
}

impl From<CustomTokenizer> for Tokenization {
    fn from(tokenizer: CustomTokenizer) -> Self {
        Tokenization::Custom(tokenizer)
    }
}
