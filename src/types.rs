//! Core types for textrank_summarizer
//!
//! This module defines the data structures shared by every pipeline stage:
//! term interning, languages, sentences, and configuration.

use crate::errors::{Result, TextRankError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// String Interning
// ============================================================================

/// A pool for string interning.
///
/// Each distinct term of a document is stored once and referred to by a dense
/// `u32` id, which is also its vocabulary dimension. Ids are assigned in
/// first-seen order, so two runs over the same text produce the same ids.
#[derive(Debug, Default)]
pub struct StringPool {
    string_to_id: FxHashMap<Arc<str>, u32>,
    id_to_string: Vec<Arc<str>>,
}

impl StringPool {
    /// Create a new empty string pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning its ID
    pub fn intern(&mut self, s: &str) -> u32 {
        if let Some(&id) = self.string_to_id.get(s) {
            return id;
        }

        let id = self.id_to_string.len() as u32;
        let arc: Arc<str> = s.into();
        self.string_to_id.insert(arc.clone(), id);
        self.id_to_string.push(arc);
        id
    }

    /// Look up the ID of an already interned string
    pub fn id(&self, s: &str) -> Option<u32> {
        self.string_to_id.get(s).copied()
    }

    /// Get a string by its ID
    pub fn get(&self, id: u32) -> Option<&str> {
        self.id_to_string.get(id as usize).map(|s| s.as_ref())
    }

    /// Get the number of unique strings in the pool
    pub fn len(&self) -> usize {
        self.id_to_string.len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.id_to_string.is_empty()
    }
}

// ============================================================================
// Language
// ============================================================================

/// Languages with a segmentation rule and a stopword list.
///
/// Anything else is rejected by [`Language::from_tag`] instead of falling
/// through to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Korean,
}

impl Language {
    /// Parse an ISO-639 style tag.
    ///
    /// Matching is case-insensitive and only looks at the primary subtag, so
    /// `"en-US"` and `"EN_gb"` are both English.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match primary.as_str() {
            "en" | "english" => Ok(Language::English),
            "ko" | "korean" => Ok(Language::Korean),
            _ => Err(TextRankError::unsupported_language(tag)),
        }
    }

    /// The canonical two-letter tag
    pub fn as_tag(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Korean => "ko",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = TextRankError;

    fn from_str(value: &str) -> Result<Self> {
        Language::from_tag(value)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The trimmed sentence text
    pub text: String,
    /// Start byte offset in the original text
    pub start: usize,
    /// End byte offset in the original text (exclusive)
    pub end: usize,
    /// Sentence index within the document
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }
}

// ============================================================================
// Output Order
// ============================================================================

/// Order in which selected sentences are joined into the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputOrder {
    /// Highest score first
    #[default]
    Rank,
    /// Original document order
    Document,
}

impl std::str::FromStr for OutputOrder {
    type Err = TextRankError;

    /// Parse `"rank"` or `"document"` (case-insensitive)
    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "rank" => Ok(OutputOrder::Rank),
            "document" => Ok(OutputOrder::Document),
            other => Err(TextRankError::invalid_config(format!(
                "unknown output order {other:?}, expected \"rank\" or \"document\""
            ))),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for extractive summarization
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Maximum iterations for PageRank convergence
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change between iterations
    pub convergence_threshold: f64,
    /// String placed between selected sentences
    pub separator: String,
    /// Order of the selected sentences in the summary
    pub output_order: OutputOrder,
    /// Reject documents with more sentences than this
    pub max_sentences: Option<usize>,
    /// Minimum characters for a token to become a term
    pub min_token_chars: usize,
    /// Additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
    /// Sentence count from which similarity rows are computed in parallel
    pub parallel_threshold: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            separator: "\n".to_string(),
            output_order: OutputOrder::Rank,
            max_sentences: None,
            min_token_chars: 2,
            stopwords: Vec::new(),
            parallel_threshold: 256,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.damping) {
            return Err(TextRankError::invalid_config(format!(
                "damping must be in [0, 1), got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(TextRankError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.convergence_threshold > 0.0) {
            return Err(TextRankError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if self.min_token_chars == 0 {
            return Err(TextRankError::invalid_config("min_token_chars must be > 0"));
        }

        if self.max_sentences == Some(0) {
            return Err(TextRankError::invalid_config("max_sentences must be > 0"));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set the summary separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Builder method: set output order
    pub fn with_output_order(mut self, order: OutputOrder) -> Self {
        self.output_order = order;
        self
    }

    /// Builder method: set the maximum sentence count
    pub fn with_max_sentences(mut self, max: usize) -> Self {
        self.max_sentences = Some(max);
        self
    }

    /// Builder method: set minimum token length
    pub fn with_min_token_chars(mut self, chars: usize) -> Self {
        self.min_token_chars = chars;
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: set the parallel similarity threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_pool() {
        let mut pool = StringPool::new();
        let id1 = pool.intern("hello");
        let id2 = pool.intern("world");
        let id3 = pool.intern("hello");

        assert_eq!(id1, id3);
        assert_ne!(id1, id2);
        assert_eq!(pool.get(id1), Some("hello"));
        assert_eq!(pool.id("world"), Some(id2));
        assert_eq!(pool.id("missing"), None);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_language_from_tag() {
        assert_eq!(Language::from_tag("en").unwrap(), Language::English);
        assert_eq!(Language::from_tag("EN-us").unwrap(), Language::English);
        assert_eq!(Language::from_tag("ko_KR").unwrap(), Language::Korean);
        assert_eq!(Language::from_tag(" korean ").unwrap(), Language::Korean);
        assert_eq!("ko".parse::<Language>().unwrap(), Language::Korean);
    }

    #[test]
    fn test_unsupported_language() {
        for tag in ["fr", "", "und", "zh-Hans"] {
            match Language::from_tag(tag) {
                Err(TextRankError::UnsupportedLanguage { tag: got }) => assert_eq!(got, tag),
                other => panic!("expected UnsupportedLanguage for {tag:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_output_order_parse() {
        assert_eq!("document".parse::<OutputOrder>().unwrap(), OutputOrder::Document);
        assert_eq!("rank".parse::<OutputOrder>().unwrap(), OutputOrder::Rank);
        assert_eq!(" Document ".parse::<OutputOrder>().unwrap(), OutputOrder::Document);
        assert!(matches!(
            "whatever".parse::<OutputOrder>(),
            Err(TextRankError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_validation() {
        assert!(SummarizerConfig::default().validate().is_ok());

        assert!(SummarizerConfig::default().with_damping(1.0).validate().is_err());
        assert!(SummarizerConfig::default().with_damping(-0.1).validate().is_err());
        assert!(SummarizerConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
        assert!(SummarizerConfig::default()
            .with_convergence_threshold(0.0)
            .validate()
            .is_err());
        assert!(SummarizerConfig::default()
            .with_min_token_chars(0)
            .validate()
            .is_err());
        assert!(SummarizerConfig::default()
            .with_max_sentences(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_config_from_json_partial() {
        let config = SummarizerConfig::from_json(
            r#"{"separator": " ", "output_order": "document", "max_sentences": 500}"#,
        )
        .unwrap();

        assert_eq!(config.separator, " ");
        assert_eq!(config.output_order, OutputOrder::Document);
        assert_eq!(config.max_sentences, Some(500));
        assert_eq!(config.damping, 0.85);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_config_from_json_rejects_invalid() {
        assert!(matches!(
            SummarizerConfig::from_json(r#"{"damping": 2.0}"#),
            Err(TextRankError::InvalidConfig(_))
        ));
        assert!(matches!(
            SummarizerConfig::from_json("not json"),
            Err(TextRankError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_config_round_trip() {
        let config = SummarizerConfig::default()
            .with_stopwords(["foo", "bar"])
            .with_output_order(OutputOrder::Document);
        let json = serde_json::to_string(&config).unwrap();
        let back = SummarizerConfig::from_json(&json).unwrap();
        assert_eq!(config, back);
    }
}
