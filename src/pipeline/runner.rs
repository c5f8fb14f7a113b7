//! Pipeline runner: stage execution and artifact flow.
//!
//! A [`SummaryPipeline`] is built for one language and one configuration.
//! [`SummaryPipeline::run`] executes the stages in order, threading the
//! intermediate artifacts between them and notifying a [`PipelineObserver`]
//! at each boundary:
//!
//! 1. Segment text into sentences
//! 2. Vectorize sentences (TF-IDF)
//! 3. Build the similarity graph
//! 4. Rank sentences (PageRank)
//! 5. Select the top sentences

use crate::errors::{Result, TextRankError};
use crate::graph::builder::build_graph_parallel;
use crate::graph::csr::CsrGraph;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::standard::StandardPageRank;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_GRAPH, STAGE_RANK,
    STAGE_SEGMENT, STAGE_SELECT, STAGE_VECTORIZE,
};
use crate::summarizer::selector::{join, SelectedSentence, SentenceSelector};
use crate::summarizer::tfidf::TfIdfVectorizer;
use crate::types::{Language, Sentence, SummarizerConfig};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Structured output of one summarization
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    /// Language the document was processed as
    pub language: Language,
    /// Selected sentences joined with the configured separator
    pub summary: String,
    /// Selected sentences, in output order
    pub sentences: Vec<SelectedSentence>,
    /// Number of sentences found in the document
    pub num_sentences: usize,
    /// PageRank iterations performed
    pub iterations: usize,
    /// Whether PageRank converged within its iteration bound
    pub converged: bool,
}

/// All stages configured for one language
#[derive(Debug, Clone)]
pub struct SummaryPipeline {
    language: Language,
    segmenter: SentenceSegmenter,
    vectorizer: TfIdfVectorizer,
    ranker: StandardPageRank,
    selector: SentenceSelector,
    separator: String,
    max_sentences: Option<usize>,
    parallel_threshold: usize,
}

impl SummaryPipeline {
    /// Build the pipeline for `language` from `config`
    pub fn new(language: Language, config: &SummarizerConfig) -> Self {
        let mut stopwords = StopwordFilter::for_language(language);
        stopwords.add_stopwords(&config.stopwords);

        let vectorizer = TfIdfVectorizer::new(stopwords)
            .with_tokenizer(Tokenizer::new().with_min_chars(config.min_token_chars));

        let ranker = StandardPageRank::new()
            .with_damping(config.damping)
            .with_max_iterations(config.max_iterations)
            .with_threshold(config.convergence_threshold);

        Self {
            language,
            segmenter: SentenceSegmenter::new(language),
            vectorizer,
            ranker,
            selector: SentenceSelector::new().with_order(config.output_order),
            separator: config.separator.clone(),
            max_sentences: config.max_sentences,
            parallel_threshold: config.parallel_threshold,
        }
    }

    /// The language this pipeline processes
    pub fn language(&self) -> Language {
        self.language
    }

    /// Segment `text`, failing fast once the sentence limit is exceeded
    pub fn segment(&self, text: &str) -> Result<Vec<Sentence>> {
        let mut split = self.segmenter.split(text);
        let mut sentences = Vec::new();

        while let Some(sentence) = split.next() {
            if let Some(limit) = self.max_sentences {
                if sentences.len() == limit {
                    return Err(TextRankError::DocumentTooLarge {
                        sentences: limit + 1 + split.count(),
                        limit,
                    });
                }
            }
            sentences.push(sentence);
        }

        Ok(sentences)
    }

    /// Execute the pipeline, selecting `k` sentences.
    ///
    /// Fails with [`TextRankError::EmptyInput`] when segmentation finds no
    /// sentence and [`TextRankError::DocumentTooLarge`] when the configured
    /// limit is exceeded.
    pub fn run(
        &self,
        text: &str,
        k: usize,
        observer: &mut impl PipelineObserver,
    ) -> Result<SummaryResult> {
        // Each stage runs in its own block so its span closes before the next opens.

        // Stage 1: Segment
        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let sentences = self.segment(text)?;
            observer.on_stage_end(STAGE_SEGMENT, &StageReport::new(clock.elapsed()));
            observer.on_sentences(&sentences);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                language = %self.language,
                sentences = sentences.len(),
                "segmented document"
            );
            sentences
        };

        if sentences.is_empty() {
            return Err(TextRankError::EmptyInput);
        }

        // Stage 2: Vectorize
        let matrix = {
            trace_stage!(STAGE_VECTORIZE);
            observer.on_stage_start(STAGE_VECTORIZE);
            let clock = StageClock::start();
            let matrix = self.vectorizer.fit_transform(&sentences);
            observer.on_stage_end(STAGE_VECTORIZE, &StageReport::new(clock.elapsed()));

            #[cfg(feature = "tracing")]
            tracing::debug!(vocabulary = matrix.vocabulary_size(), "vectorized sentences");
            matrix
        };

        // Stage 3: Build graph
        let graph = {
            trace_stage!(STAGE_GRAPH);
            observer.on_stage_start(STAGE_GRAPH);
            let clock = StageClock::start();
            let builder = build_graph_parallel(matrix.vectors(), self.parallel_threshold);
            let graph = CsrGraph::from_builder(&builder);
            let report = StageReportBuilder::new(clock.elapsed())
                .nodes(graph.num_nodes)
                .edges(graph.undirected_edges())
                .build();
            observer.on_stage_end(STAGE_GRAPH, &report);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                nodes = graph.num_nodes,
                edges = graph.undirected_edges(),
                "built similarity graph"
            );
            graph
        };

        // Stage 4: Rank
        let rank = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let rank = self.ranker.run(&graph);
            let report = StageReportBuilder::new(clock.elapsed())
                .iterations(rank.iterations)
                .converged(rank.converged)
                .residual(rank.delta)
                .build();
            observer.on_stage_end(STAGE_RANK, &report);
            observer.on_rank(&rank);
            rank
        };

        // Stage 5: Select
        let (selected, summary) = {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let selected = self.selector.select(&sentences, &rank.scores, k);
            let summary = join(&selected, &self.separator);
            observer.on_stage_end(STAGE_SELECT, &StageReport::new(clock.elapsed()));
            (selected, summary)
        };

        Ok(SummaryResult {
            language: self.language,
            summary,
            sentences: selected,
            num_sentences: sentences.len(),
            iterations: rank.iterations,
            converged: rank.converged,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
