//! Bundled stop-word and synonym tables.
//!
//! The defaults are process-wide constants built once on first use. Caller
//! overrides are never merged into them: [`StopWords`] and [`SynonymTable`]
//! are borrowed views that consult the caller's table first and fall back to
//! the bundled one, so no per-call allocation happens.
//!
//! All bundled entries are lowercase. Matching is exact, so they only fire on
//! cased text when `lowercase` is enabled.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

/// Mixed French/English stop-words.
pub static DEFAULT_STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // French pronouns and determiners
        "je", "tu", "il", "elle", "nous", "vous", "ils", "elles", "le", "la", "les", "de", "des",
        "du", "un", "une", "et", "ce", "cet", "cette", "ces", "au", "aux", "en", "dans", "pour",
        "par", "sur", "avec", "que", "qui", "est", "sont", "plus", "très", "ou",
        // English
        "the", "a", "an", "of", "to", "is", "are", "be", "and", "or", "in", "on", "for", "with",
        "it", "this", "that",
    ]
    .into_iter()
    .collect()
});

/// Token → canonical representative.
pub static DEFAULT_SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("auto", "voiture"),
        ("automobile", "voiture"),
        ("car", "voiture"),
        ("vite", "rapide"),
        ("fast", "rapide"),
        ("quick", "rapide"),
    ]
    .into_iter()
    .collect()
});

/// Active stop-word set: the caller's words plus, optionally, the defaults.
#[derive(Debug, Clone, Copy)]
pub struct StopWords<'a> {
    use_default: bool,
    custom: &'a BTreeSet<String>,
}

impl<'a> StopWords<'a> {
    pub fn new(use_default: bool, custom: &'a BTreeSet<String>) -> Self {
        Self {
            use_default,
            custom,
        }
    }

    pub fn is_active(&self) -> bool {
        self.use_default || !self.custom.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.custom.contains(token) || (self.use_default && DEFAULT_STOP_WORDS.contains(token))
    }
}

/// Active synonym table. Caller entries shadow bundled ones on the same key.
#[derive(Debug, Clone, Copy)]
pub struct SynonymTable<'a> {
    use_default: bool,
    custom: &'a BTreeMap<String, String>,
}

impl<'a> SynonymTable<'a> {
    pub fn new(use_default: bool, custom: &'a BTreeMap<String, String>) -> Self {
        Self {
            use_default,
            custom,
        }
    }

    pub fn is_active(&self) -> bool {
        self.use_default || !self.custom.is_empty()
    }

    /// Representative for `token`, or `None` when the token is not mapped.
    pub fn resolve(&self, token: &str) -> Option<&'a str> {
        if let Some(rep) = self.custom.get(token) {
            return Some(rep.as_str());
        }
        if self.use_default {
            return DEFAULT_SYNONYMS.get(token).copied();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_tables_are_lowercase() {
        assert!(DEFAULT_STOP_WORDS
            .iter()
            .all(|w| w.to_lowercase() == *w));
        assert!(DEFAULT_SYNONYMS
            .iter()
            .all(|(k, v)| k.to_lowercase() == *k && v.to_lowercase() == *v));
    }

    #[test]
    fn stop_words_union_default_and_custom() {
        let custom: BTreeSet<String> = ["loyal".to_string()].into_iter().collect();
        let words = StopWords::new(true, &custom);
        assert!(words.is_active());
        assert!(words.contains("loyal"));
        assert!(words.contains("the"));
        assert!(!words.contains("The"));
        assert!(!words.contains("banane"));
    }

    #[test]
    fn stop_words_inactive_when_empty() {
        let custom = BTreeSet::new();
        let words = StopWords::new(false, &custom);
        assert!(!words.is_active());
        assert!(!words.contains("the"));
    }

    #[test]
    fn custom_synonyms_shadow_defaults() {
        let custom: BTreeMap<String, String> =
            [("car".to_string(), "vehicle".to_string())].into_iter().collect();
        let table = SynonymTable::new(true, &custom);
        assert_eq!(table.resolve("car"), Some("vehicle"));
        assert_eq!(table.resolve("auto"), Some("voiture"));
        assert_eq!(table.resolve("velo"), None);
    }

    #[test]
    fn defaults_ignored_unless_enabled() {
        let custom = BTreeMap::new();
        let table = SynonymTable::new(false, &custom);
        assert!(!table.is_active());
        assert_eq!(table.resolve("auto"), None);
    }
}
