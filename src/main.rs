use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use jaccard::{jaccard_text, Comparison, JaccardConfig, JaccardFileConfig, TokenMode};

/// Multiset Jaccard similarity between two texts.
#[derive(Parser, Debug)]
#[command(name = "jaccard", version, about)]
struct Cli {
    /// YAML configuration file; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tokenize per character or per word
    #[arg(short, long)]
    mode: Option<TokenMode>,

    #[arg(long)]
    lowercase: bool,

    #[arg(long)]
    strip_punctuation: bool,

    /// Keep whitespace characters as tokens (char mode)
    #[arg(long)]
    keep_whitespace: bool,

    /// Enable the bundled French/English stop-words
    #[arg(long)]
    default_stopwords: bool,

    /// Extra stop-word, repeatable
    #[arg(long = "stop-word", value_name = "WORD")]
    stop_words: Vec<String>,

    /// Strip one trailing 's' from each token
    #[arg(long)]
    plural: bool,

    /// Enable the bundled synonym table
    #[arg(long)]
    default_synonyms: bool,

    /// Synonym mapping, repeatable
    #[arg(long = "synonym", value_name = "TOKEN=REPR", value_parser = parse_synonym)]
    synonyms: Vec<(String, String)>,

    /// Compare n-grams of this many tokens
    #[arg(short, long, value_name = "N")]
    ngram: Option<usize>,

    /// Match tokens position by position
    #[arg(long)]
    positions: bool,

    /// Count each distinct token once
    #[arg(long)]
    distinct: bool,

    /// Print both token sequences
    #[arg(long)]
    show_tokens: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log filter directive, e.g. "debug" or "tokenizer=trace" [default: RUST_LOG, then warn]
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    text_a: String,

    text_b: String,
}

impl Cli {
    fn jaccard_config(&self) -> Result<JaccardConfig> {
        let mut file = match &self.config {
            Some(path) => JaccardFileConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => JaccardFileConfig::default(),
        };

        let tok = &mut file.tokenize;
        if let Some(mode) = self.mode {
            tok.mode = mode;
        }
        tok.lowercase |= self.lowercase;
        tok.strip_punctuation |= self.strip_punctuation;
        tok.keep_whitespace |= self.keep_whitespace;
        tok.use_default_stopwords |= self.default_stopwords;
        tok.stop_words.extend(self.stop_words.iter().cloned());
        tok.normalize_plural |= self.plural;
        tok.use_default_synonyms |= self.default_synonyms;
        tok.synonyms.extend(self.synonyms.iter().cloned());
        if let Some(n) = self.ngram {
            tok.ngram_size = Some(n);
        }
        file.respect_positions |= self.positions;
        file.distinct_tokens |= self.distinct;

        file.validate()?;
        Ok(file.into())
    }
}

fn parse_synonym(s: &str) -> Result<(String, String), String> {
    let (token, repr) = s
        .split_once('=')
        .ok_or_else(|| format!("expected TOKEN=REPR, got '{s}'"))?;
    if token.is_empty() || repr.is_empty() {
        return Err(format!("empty side in synonym '{s}'"));
    }
    Ok((token.to_string(), repr.to_string()))
}

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    comparison: Comparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens_a: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens_b: Option<Vec<String>>,
}

fn fmt_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| "undefined".to_string(), |v| format!("{v:.4}"))
}

const DEFAULT_LOG_FILTER: &str = "warn";

/// `--log-level` wins over `RUST_LOG`, which wins over the default.
fn filter_directive(flag: Option<&str>, env: Option<String>) -> String {
    flag.map(str::to_string)
        .or(env.filter(|directive| !directive.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn init_tracing(cli: &Cli) {
    let directive = filter_directive(
        cli.log_level.as_deref(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    );
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let cfg = cli.jaccard_config()?;
    let comparison = jaccard_text(&cli.text_a, &cli.text_b, &cfg)?;
    let (tokens_a, tokens_b) = if cli.show_tokens {
        (
            Some(cfg.tokenize(&cli.text_a)?),
            Some(cfg.tokenize(&cli.text_b)?),
        )
    } else {
        (None, None)
    };

    if cli.json {
        let report = Report {
            comparison,
            tokens_a,
            tokens_b,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let (Some(a), Some(b)) = (&tokens_a, &tokens_b) {
        println!("tokens_a:     {a:?}");
        println!("tokens_b:     {b:?}");
    }
    println!("intersection: {}", comparison.intersection);
    println!("union:        {}", comparison.union);
    println!("index:        {}", fmt_ratio(comparison.index));
    println!("distance:     {}", fmt_ratio(comparison.distance));
    Ok(())
}
