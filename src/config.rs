//! YAML configuration files for text comparison.
//!
//! Tokenizer options sit at the top level next to the comparison switches,
//! so a file reads as one flat list of settings:
//!
//! ```yaml
//! version: "1"
//! name: "french word overlap"
//!
//! mode: word
//! lowercase: true
//! strip_punctuation: true
//! use_default_stopwords: true
//! stop_words: ["loyal"]
//! normalize_plural: true
//! use_default_synonyms: true
//! synonyms:
//!   chien: canin
//! ngram_size: 2
//!
//! respect_positions: false
//! distinct_tokens: false
//! ```
//!
//! Every key other than `version` is optional. Code hooks (custom tokenizer,
//! lemmatizer) cannot be expressed in YAML and are attached in code.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokenizer::TokenizeConfig;
use tracing::warn;

use crate::JaccardConfig;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// On-disk form of a [`JaccardConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JaccardFileConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(flatten)]
    pub tokenize: TokenizeConfig,

    #[serde(default)]
    pub respect_positions: bool,

    #[serde(default)]
    pub distinct_tokens: bool,

    /// Keys no field claimed, usually typos. Reported, never applied.
    #[serde(flatten, skip_serializing)]
    unknown: BTreeMap<String, serde_yaml::Value>,
}

impl JaccardFileConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: JaccardFileConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        for key in config.unknown_keys() {
            warn!(key, "config_unknown_key");
        }
        Ok(config)
    }

    /// Top-level keys that matched no setting.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.unknown.keys().map(String::as_str)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.tokenize
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))
    }
}

impl Default for JaccardFileConfig {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            name: None,
            tokenize: TokenizeConfig::default(),
            respect_positions: false,
            distinct_tokens: false,
            unknown: BTreeMap::new(),
        }
    }
}

impl From<JaccardFileConfig> for JaccardConfig {
    fn from(file: JaccardFileConfig) -> Self {
        JaccardConfig::new(file.tokenize)
            .with_positions(file.respect_positions)
            .with_distinct_tokens(file.distinct_tokens)
    }
}
