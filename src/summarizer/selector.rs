//! Top-K sentence selection
//!
//! Sentences are ranked by descending score. Equal scores are ordered by
//! ascending sentence index, so the same scores always give the same
//! selection.

use crate::types::{OutputOrder, Sentence};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Scores are compared after rounding to this many buckets per unit, so that
/// floating-point noise below 1e-12 counts as a tie.
const SCORE_BUCKETS: f64 = 1e12;

/// A selected sentence with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    /// The sentence
    pub sentence: Sentence,
    /// PageRank score of the sentence
    pub score: f64,
    /// 1-based rank among all sentences
    pub rank: usize,
}

/// Top-K selector
#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    order: OutputOrder,
}

impl SentenceSelector {
    /// Create a selector that returns sentences in rank order
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the order of the returned sentences
    pub fn with_order(mut self, order: OutputOrder) -> Self {
        self.order = order;
        self
    }

    /// Select the `k` best sentences.
    ///
    /// `scores[i]` is the score of `sentences[i]`. A `k` larger than the
    /// number of sentences selects all of them.
    pub fn select(&self, sentences: &[Sentence], scores: &[f64], k: usize) -> Vec<SelectedSentence> {
        debug_assert_eq!(sentences.len(), scores.len());

        let mut ranked: Vec<usize> = (0..sentences.len().min(scores.len())).collect();
        ranked.sort_by(|&a, &b| {
            compare_scores(scores[a], scores[b])
                .then_with(|| sentences[a].index.cmp(&sentences[b].index))
        });

        let mut selected: Vec<SelectedSentence> = ranked
            .into_iter()
            .take(k)
            .enumerate()
            .map(|(rank, i)| SelectedSentence {
                sentence: sentences[i].clone(),
                score: scores[i],
                rank: rank + 1,
            })
            .collect();

        if self.order == OutputOrder::Document {
            selected.sort_by_key(|s| s.sentence.index);
        }

        selected
    }
}

/// Descending score order, treating near-equal scores as ties
fn compare_scores(a: f64, b: f64) -> Ordering {
    let bucket = |s: f64| (s * SCORE_BUCKETS).round();
    bucket(b).total_cmp(&bucket(a))
}

/// Join the selected sentences' text with `separator`
pub fn join(selected: &[SelectedSentence], separator: &str) -> String {
    selected
        .iter()
        .map(|s| s.sentence.text.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
