//! Extractive summarization entry points
//!
//! [`ExtractiveSummarizer`] resolves the document language, then hands the
//! text to a [`SummaryPipeline`] built for that language. The free function
//! [`summarize`] is the one-call form with default configuration.

use crate::errors::{Result, TextRankError};
use crate::nlp::detect::{LanguageDetector, ScriptDetector};
use crate::pipeline::observer::{NoopObserver, PipelineObserver};
use crate::pipeline::runner::{SummaryPipeline, SummaryResult};
use crate::types::{Language, SummarizerConfig};
use rayon::prelude::*;
use std::fmt;

/// Summarize `text` into at most `sentence_count` sentences.
///
/// `language_hint`, when present, overrides detection. Uses the default
/// configuration and the built-in [`ScriptDetector`].
///
/// # Example
///
/// ```
/// use textrank_summarizer::summarize;
///
/// let summary = summarize(
///     "Volcanoes erupt lava. Volcanoes emit ash. Penguins swim.",
///     Some("en"),
///     1,
/// )
/// .unwrap();
/// assert_eq!(summary, "Volcanoes erupt lava.");
/// ```
pub fn summarize(text: &str, language_hint: Option<&str>, sentence_count: usize) -> Result<String> {
    ExtractiveSummarizer::new().summarize(text, language_hint, sentence_count)
}

/// Configured summarizer with a pluggable language detector.
///
/// Holds no per-document state, so one instance can serve many threads.
pub struct ExtractiveSummarizer {
    config: SummarizerConfig,
    detector: Box<dyn LanguageDetector>,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExtractiveSummarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractiveSummarizer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ExtractiveSummarizer {
    /// Create a summarizer with default configuration
    pub fn new() -> Self {
        Self {
            config: SummarizerConfig::default(),
            detector: Box::new(ScriptDetector),
        }
    }

    /// Create a summarizer with a validated configuration
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            detector: Box::new(ScriptDetector),
        })
    }

    /// Replace the language detector
    pub fn with_detector(mut self, detector: impl LanguageDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    /// The configuration this summarizer runs with
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Resolve the language of `text`: the hint wins, otherwise the detector
    pub fn resolve_language(&self, text: &str, language_hint: Option<&str>) -> Result<Language> {
        match language_hint {
            Some(tag) => Language::from_tag(tag),
            None => Language::from_tag(&self.detector.detect(text)),
        }
    }

    /// Summarize `text` into at most `sentence_count` sentences
    pub fn summarize(
        &self,
        text: &str,
        language_hint: Option<&str>,
        sentence_count: usize,
    ) -> Result<String> {
        self.summarize_detailed(text, language_hint, sentence_count)
            .map(|result| result.summary)
    }

    /// Summarize and return the selected sentences with their scores
    pub fn summarize_detailed(
        &self,
        text: &str,
        language_hint: Option<&str>,
        sentence_count: usize,
    ) -> Result<SummaryResult> {
        self.summarize_with_observer(text, language_hint, sentence_count, &mut NoopObserver)
    }

    /// Summarize while reporting each pipeline stage to `observer`
    pub fn summarize_with_observer(
        &self,
        text: &str,
        language_hint: Option<&str>,
        sentence_count: usize,
        observer: &mut impl PipelineObserver,
    ) -> Result<SummaryResult> {
        if sentence_count < 1 {
            return Err(TextRankError::invalid_parameter(
                "sentence_count",
                "must be at least 1",
            ));
        }
        if text.trim().is_empty() {
            return Err(TextRankError::EmptyInput);
        }

        let language = self.resolve_language(text, language_hint)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            %language,
            hinted = language_hint.is_some(),
            sentence_count,
            "summarizing document"
        );

        SummaryPipeline::new(language, &self.config).run(text, sentence_count, observer)
    }

    /// Summarize many documents in parallel.
    ///
    /// Results are returned in input order; one failing document does not
    /// affect the others.
    pub fn summarize_batch(
        &self,
        texts: &[&str],
        language_hint: Option<&str>,
        sentence_count: usize,
    ) -> Vec<Result<String>> {
        texts
            .par_iter()
            .map(|text| self.summarize(text, language_hint, sentence_count))
            .collect()
    }
}
