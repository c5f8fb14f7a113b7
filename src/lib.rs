//! # textrank_summarizer
//!
//! Extractive text summarization with TextRank.
//!
//! A document is split into sentences, each sentence becomes a TF-IDF
//! vector, and sentences are linked by cosine similarity. PageRank over the
//! resulting graph scores every sentence, and the highest-scoring ones are
//! returned verbatim.
//!
//! ## Features
//!
//! - **Languages**: English (Unicode sentence boundaries with abbreviation
//!   handling) and Korean (punctuation boundaries)
//! - **Pluggable detection**: bring your own language detector, or use the
//!   built-in script-based one
//! - **Observable**: `tracing` spans per stage and a [`PipelineObserver`] hook
//! - **Parallel**: large graphs and document batches use rayon
//!
//! ```
//! let summary = textrank_summarizer::summarize(
//!     "Volcanoes erupt lava. Volcanoes emit ash. Penguins swim.",
//!     None,
//!     2,
//! )
//! .unwrap();
//! assert_eq!(summary, "Volcanoes erupt lava.\nVolcanoes emit ash.");
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{Language, OutputOrder, Sentence, StringPool, SummarizerConfig};

// Re-export main functionality
pub use graph::{builder::SimilarityGraphBuilder, csr::CsrGraph};
pub use nlp::{
    detect::{LanguageDetector, ScriptDetector},
    segmenter::SentenceSegmenter,
    stopwords::StopwordFilter,
    tokenizer::Tokenizer,
};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use pipeline::{
    observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver},
    runner::{SummaryPipeline, SummaryResult},
};
pub use summarizer::{
    extractive::{summarize, ExtractiveSummarizer},
    selector::{SelectedSentence, SentenceSelector},
    tfidf::{TfIdfMatrix, TfIdfVectorizer},
    unit_vector::UnitVector,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
