use std::borrow::Cow;
use std::time::Instant;

use tracing::{debug, warn, Level};

use crate::config::{TokenMode, TokenizeConfig, Tokenization};
use crate::error::TokenizeError;
use crate::hooks::{CustomTokenizer, HookError};
use crate::ngram::ngrams;

/// Main entry point. Turns raw text into an ordered token sequence using
/// whichever tokenization path is configured.
pub fn tokenize(text: &str, tokenization: &Tokenization) -> Result<Vec<String>, TokenizeError> {
    match tokenization {
        Tokenization::Pipeline(cfg) => tokenize_with(text, cfg),
        Tokenization::Custom(custom) => tokenize_custom(text, custom),
    }
}

/// Runs the built-in pipeline.
///
/// Document-level transforms (case, punctuation) run before splitting;
/// per-token transforms run in the order stop-words, plural, lemmatizer,
/// synonyms; n-gram windowing runs last over the normalized stream.
pub fn tokenize_with(text: &str, cfg: &TokenizeConfig) -> Result<Vec<String>, TokenizeError> {
    if let Err(err) = cfg.validate() {
        warn!(error = %err, "tokenize_rejected");
        return Err(err);
    }

    let start = Instant::now();
    let span = tracing::span!(
        Level::DEBUG,
        "tokenize.pipeline",
        mode = %cfg.mode,
        input_len = text.len()
    );
    let _guard = span.enter();

    let mut document: Cow<str> = Cow::Borrowed(text);
    if cfg.lowercase {
        document = Cow::Owned(document.to_lowercase());
    }
    if cfg.strip_punctuation {
        document = Cow::Owned(strip_punctuation(&document));
    }

    let mut tokens = split_base_units(&document, cfg.mode, cfg.keep_whitespace);

    let stop_words = cfg.stop_word_set();
    if stop_words.is_active() {
        tokens.retain(|token| !stop_words.contains(token));
    }

    if cfg.normalize_plural {
        tokens.iter_mut().for_each(strip_plural);
    }

    if let Some(lemmatizer) = &cfg.lemmatizer {
        tokens = tokens
            .iter()
            .map(|token| lemmatizer.lemmatize(token))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| hook_failure("lemmatizer", err))?;
    }

    let synonyms = cfg.synonym_table();
    if synonyms.is_active() {
        for token in tokens.iter_mut() {
            if let Some(rep) = synonyms.resolve(token) {
                if rep != token.as_str() {
                    *token = rep.to_owned();
                }
            }
        }
    }

    if let Some(n) = cfg.ngram_size {
        if n > 1 {
            tokens = ngrams(&tokens, n, cfg.mode.ngram_joiner());
        }
    }

    debug!(
        token_count = tokens.len(),
        elapsed_micros = start.elapsed().as_micros(),
        "tokenize_success"
    );
    Ok(tokens)
}

fn tokenize_custom(text: &str, custom: &CustomTokenizer) -> Result<Vec<String>, TokenizeError> {
    let tokens = custom
        .tokenize(text)
        .map_err(|err| hook_failure("tokenizer", err))?;
    debug!(token_count = tokens.len(), "tokenize_custom_success");
    Ok(tokens)
}

fn hook_failure(hook: &'static str, err: HookError) -> TokenizeError {
    warn!(hook, error = %err, "tokenize_hook_failure");
    TokenizeError::Hook(err)
}

/// Removes every ASCII punctuation character. Nothing is inserted in their
/// place, so `"l'auto"` becomes `"lauto"`.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_ascii_punctuation()).collect()
}

/// Splits text into base units: whitespace-delimited words, or characters.
fn split_base_units(text: &str, mode: TokenMode, keep_whitespace: bool) -> Vec<String> {
    match mode {
        TokenMode::Word => text.split_whitespace().map(str::to_owned).collect(),
        TokenMode::Char => text
            .chars()
            .filter(|ch| keep_whitespace || !ch.is_whitespace())
            .map(String::from)
            .collect(),
    }
}

/// Drops a single trailing `s`, leaving a bare `"s"` alone.
fn strip_plural(token: &mut String) {
    if token.len() > 1 && token.ends_with('s') {
        token.pop();
    }
}
