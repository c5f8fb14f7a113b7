//! Property-based tests for summarization invariants.
//!
//! Uses proptest to fuzz-verify:
//!   - Selected sentences are verbatim slices of the input
//!   - Repeated runs give identical summaries
//!   - PageRank scores form a probability distribution
//!   - Similarity graph weights lie in [0, 1] with an empty diagonal

use proptest::prelude::*;

use textrank_summarizer::graph::builder::build_graph_parallel;
use textrank_summarizer::{
    CsrGraph, ExtractiveSummarizer, Language, SentenceSegmenter, StandardPageRank,
    StopwordFilter, TfIdfVectorizer,
};

const VOCABULARY: &[&str] = &[
    "volcano", "penguin", "glacier", "lava", "ocean", "river", "forest", "engine", "compiler",
    "rust", "graph", "summary", "sentence", "rank", "vector", "matrix",
];

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 1..6).prop_map(|words| {
        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        sentence.push('.');
        sentence
    })
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence(), 1..12).prop_map(|sentences| sentences.join(" "))
}

fn similarity_graph(text: &str) -> CsrGraph {
    let sentences = SentenceSegmenter::new(Language::English).segment(text);
    let matrix =
        TfIdfVectorizer::new(StopwordFilter::for_language(Language::English)).fit_transform(&sentences);
    CsrGraph::from_builder(&build_graph_parallel(matrix.vectors(), 4))
}

// ═══════════════════════════════════════════════════════════════════
// Output Properties
// ═══════════════════════════════════════════════════════════════════

proptest! {
    /// Every selected sentence is an exact slice of the input.
    #[test]
    fn prop_sentences_are_verbatim(text in document(), k in 1usize..5) {
        let result = ExtractiveSummarizer::new()
            .summarize_detailed(&text, Some("en"), k)
            .unwrap();

        for selected in &result.sentences {
            let sentence = &selected.sentence;
            prop_assert_eq!(&text[sentence.start..sentence.end], sentence.text.as_str());
        }
    }

    /// Summarizing the same input twice gives the same output.
    #[test]
    fn prop_summary_is_idempotent(text in document(), k in 1usize..5) {
        let summarizer = ExtractiveSummarizer::new();
        let first = summarizer.summarize(&text, Some("en"), k).unwrap();
        let second = summarizer.summarize(&text, Some("en"), k).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Never more sentences than requested, never more than the document has.
    #[test]
    fn prop_count_is_bounded(text in document(), k in 1usize..20) {
        let n = SentenceSegmenter::new(Language::English).segment(&text).len();
        let result = ExtractiveSummarizer::new()
            .summarize_detailed(&text, Some("en"), k)
            .unwrap();

        prop_assert_eq!(result.num_sentences, n);
        prop_assert_eq!(result.sentences.len(), k.min(n));
    }

    /// A one-sentence document summarizes to itself.
    #[test]
    fn prop_single_sentence_is_summary(text in sentence(), k in 1usize..5) {
        let summary = ExtractiveSummarizer::new().summarize(&text, Some("en"), k).unwrap();
        prop_assert_eq!(summary, text);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Graph and Score Properties
// ═══════════════════════════════════════════════════════════════════

proptest! {
    /// Scores are non-negative and sum to 1.
    #[test]
    fn prop_scores_are_distribution(text in document()) {
        let graph = similarity_graph(&text);
        let result = StandardPageRank::new().run(&graph);

        prop_assert_eq!(result.scores.len(), graph.num_nodes);
        prop_assert!(result.scores.iter().all(|&s| s >= 0.0));
        let sum: f64 = result.scores.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "scores sum to {}", sum);
    }

    /// Similarities are symmetric, within [0, 1], and zero on the diagonal.
    #[test]
    fn prop_similarities_bounded(text in document()) {
        let graph = similarity_graph(&text);

        for i in 0..graph.num_nodes as u32 {
            prop_assert_eq!(graph.weight(i, i), 0.0);
            for j in 0..graph.num_nodes as u32 {
                let w = graph.weight(i, j);
                prop_assert!((0.0..=1.0).contains(&w), "weight({}, {}) = {}", i, j, w);
                prop_assert_eq!(w, graph.weight(j, i));
            }
        }
    }
}
