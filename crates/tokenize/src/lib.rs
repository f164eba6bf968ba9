//! Text tokenization for multiset Jaccard comparison.
//!
//! This crate turns raw text into an ordered token sequence. Order and
//! duplicates are preserved, since the comparator weighs repeated tokens and
//! can align tokens by position.
//!
//! ## Pipeline
//!
//! When the built-in path is configured, these steps run in a fixed order,
//! each one optional:
//!
//! 1. Case folding over the whole text
//! 2. ASCII punctuation removal over the whole text
//! 3. Split into words (whitespace) or characters
//! 4. Stop-word removal (bundled list and/or caller list)
//! 5. Plural normalization (one trailing `s`)
//! 6. Caller lemmatizer
//! 7. Synonym folding (bundled table overlaid by caller table)
//! 8. N-gram windowing
//!
//! A caller-supplied [`CustomTokenizer`] replaces all of the above.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock-dependent output, no shared mutable state. Same text and
//! configuration give the same tokens on any machine, unless a caller hook
//! says otherwise.
//!
//! ```rust
//! use tokenizer::{tokenize_with, TokenizeConfig};
//!
//! let cfg = TokenizeConfig::words().with_lowercase(true);
//! let tokens = tokenize_with("Good good DAY", &cfg).unwrap();
//! assert_eq!(tokens, vec!["good", "good", "day"]);
//! ```

mod config;
mod error;
mod hooks;
mod lexicon;
mod ngram;
mod pipeline;

pub use crate::config::{TokenMode, TokenizeConfig, Tokenization};
pub use crate::error::TokenizeError;
pub use crate::hooks::{CustomTokenizer, HookError, Lemmatize, Lemmatizer, Tokenize};
pub use crate::lexicon::{StopWords, SynonymTable, DEFAULT_STOP_WORDS, DEFAULT_SYNONYMS};
pub use crate::ngram::ngrams;
pub use crate::pipeline::{strip_punctuation, tokenize, tokenize_with};
