//! Caller-supplied tokenization hooks.
//!
//! Two seams are open to callers:
//!
//! - [`Tokenize`] replaces the whole built-in pipeline. The hook receives the
//!   raw text and its output is used as the token sequence unchanged.
//! - [`Lemmatize`] runs per token, after plural normalization and before
//!   synonym folding.
//!
//! Both are plain traits with blanket implementations for closures, so most
//! callers only ever touch [`CustomTokenizer::from_fn`] and
//! [`Lemmatizer::from_fn`]. Hooks are opaque: the pipeline assumes nothing
//! about them beyond their signature, and their errors travel back to the
//! caller untouched through [`TokenizeError::Hook`](crate::TokenizeError::Hook).
//!
//! ```rust
//! use tokenizer::{tokenize, CustomTokenizer, Tokenization};
//!
//! let csv = CustomTokenizer::from_fn(|text| {
//!     Ok(text.split(',').map(|field| field.trim().to_string()).collect())
//! });
//! let tokens = tokenize("a, b,c", &Tokenization::Custom(csv)).unwrap();
//! assert_eq!(tokens, vec!["a", "b", "c"]);
//! ```

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Error type returned by caller hooks.
pub type HookError = Box<dyn Error + Send + Sync + 'static>;

/// Full tokenization override: raw text in, token sequence out.
pub trait Tokenize: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, HookError>;
}

impl<F> Tokenize for F
where
    F: Fn(&str) -> Result<Vec<String>, HookError> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Result<Vec<String>, HookError> {
        self(text)
    }
}

/// Per-token normalization hook.
pub trait Lemmatize: Send + Sync {
    fn lemmatize(&self, token: &str) -> Result<String, HookError>;
}

impl<F> Lemmatize for F
where
    F: Fn(&str) -> Result<String, HookError> + Send + Sync,
{
    fn lemmatize(&self, token: &str) -> Result<String, HookError> {
        self(token)
    }
}

/// Shareable handle to a [`Tokenize`] implementation.
#[derive(Clone)]
pub struct CustomTokenizer(Arc<dyn Tokenize>);

impl CustomTokenizer {
    pub fn new<T: Tokenize + 'static>(tokenizer: T) -> Self {
        Self(Arc::new(tokenizer))
    }

    /// Wraps a closure. Prefer this over [`CustomTokenizer::new`] for closures
    /// so their argument and return types are inferred.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<Vec<String>, HookError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn tokenize(&self, text: &str) -> Result<Vec<String>, HookError> {
        self.0.tokenize(text)
    }
}

impl fmt::Debug for CustomTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomTokenizer(..)")
    }
}

/// Shareable handle to a [`Lemmatize`] implementation.
#[derive(Clone)]
pub struct Lemmatizer(Arc<dyn Lemmatize>);

impl Lemmatizer {
    pub fn new<L: Lemmatize + 'static>(lemmatizer: L) -> Self {
        Self(Arc::new(lemmatizer))
    }

    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<String, HookError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn lemmatize(&self, token: &str) -> Result<String, HookError> {
        self.0.lemmatize(token)
    }
}

impl fmt::Debug for Lemmatizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Lemmatizer(..)")
    }
}
