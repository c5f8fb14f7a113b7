//! TF-IDF sentence vectorization
//!
//! Each sentence of a document is treated as one "document" of the corpus:
//!
//! - `tf(t, s)  = count(t, s) / terms(s)`
//! - `idf(t)    = ln((1 + N) / (1 + df(t))) + 1`
//! - `w(t, s)   = tf(t, s) * idf(t)`, then L2-normalized per sentence
//!
//! The smoothed IDF is always ≥ 1, so a term present in every sentence still
//! contributes.

use super::unit_vector::UnitVector;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::{Sentence, StringPool};
use rustc_hash::FxHashMap;

/// Builds TF-IDF unit vectors for the sentences of one document
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
}

impl TfIdfVectorizer {
    /// Create a vectorizer with the default tokenizer
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self {
            tokenizer: Tokenizer::default(),
            stopwords,
        }
    }

    /// Replace the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Fit the vocabulary on `sentences` and transform them
    pub fn fit_transform(&self, sentences: &[Sentence]) -> TfIdfMatrix {
        let mut vocabulary = StringPool::new();

        // Per-sentence term counts, keyed by term id
        let counts: Vec<FxHashMap<u32, usize>> = sentences
            .iter()
            .map(|sentence| {
                let mut counts = FxHashMap::default();
                for term in self.tokenizer.terms(&sentence.text, &self.stopwords) {
                    let id = vocabulary.intern(&term);
                    *counts.entry(id).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for sentence_counts in &counts {
            for &id in sentence_counts.keys() {
                document_frequency[id as usize] += 1;
            }
        }

        let n = sentences.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let vectors = counts
            .iter()
            .map(|sentence_counts| {
                let total: usize = sentence_counts.values().sum();
                if total == 0 {
                    return UnitVector::new();
                }
                let dimensions = sentence_counts
                    .iter()
                    .map(|(&id, &count)| {
                        let tf = count as f64 / total as f64;
                        (id, tf * idf[id as usize])
                    })
                    .collect();
                UnitVector::from_dimensions(dimensions)
            })
            .collect();

        TfIdfMatrix {
            vocabulary,
            idf,
            vectors,
        }
    }
}

/// The fitted vocabulary and one unit vector per sentence
#[derive(Debug)]
pub struct TfIdfMatrix {
    vocabulary: StringPool,
    idf: Vec<f64>,
    vectors: Vec<UnitVector>,
}

impl TfIdfMatrix {
    /// Sentence vectors, in sentence order
    pub fn vectors(&self) -> &[UnitVector] {
        &self.vectors
    }

    /// Consume the matrix, keeping only the vectors
    pub fn into_vectors(self) -> Vec<UnitVector> {
        self.vectors
    }

    /// Number of distinct terms
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// The term id of `term`, if it is in the vocabulary
    pub fn term_id(&self, term: &str) -> Option<u32> {
        self.vocabulary.id(term)
    }

    /// Smoothed IDF of `term`, if it is in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_id(term).map(|id| self.idf[id as usize])
    }

    /// Weight of `term` in sentence `index` (0 if absent)
    pub fn weight(&self, index: usize, term: &str) -> f64 {
        match (self.vectors.get(index), self.term_id(term)) {
            (Some(vector), Some(id)) => vector.get(id),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    fn sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, 0, t.len(), i))
            .collect()
    }

    #[test]
    fn test_smoothed_idf() {
        let vectorizer = TfIdfVectorizer::new(StopwordFilter::empty());
        let matrix = vectorizer.fit_transform(&sentences(&["cat dog", "cat bird", "cat fish"]));

        // "cat" appears in every sentence: ln(4/4) + 1 = 1
        assert!((matrix.idf("cat").unwrap() - 1.0).abs() < 1e-12);
        // "dog" appears once: ln(4/2) + 1
        let expected = (4.0f64 / 2.0).ln() + 1.0;
        assert!((matrix.idf("dog").unwrap() - expected).abs() < 1e-12);
        assert_eq!(matrix.idf("zebra"), None);
        assert_eq!(matrix.vocabulary_size(), 4);
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let vectorizer = TfIdfVectorizer::new(StopwordFilter::empty());
        let matrix = vectorizer.fit_transform(&sentences(&[
            "alpha beta beta gamma",
            "beta delta",
            "epsilon",
        ]));

        for vector in matrix.vectors() {
            let norm: f64 = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_term_frequency_weights() {
        let vectorizer = TfIdfVectorizer::new(StopwordFilter::empty());
        let matrix = vectorizer.fit_transform(&sentences(&["alpha alpha beta", "gamma"]));

        // Same idf for alpha and beta, alpha counted twice
        let alpha = matrix.weight(0, "alpha");
        let beta = matrix.weight(0, "beta");
        assert!((alpha - 2.0 * beta).abs() < 1e-12);
        assert_eq!(matrix.weight(1, "alpha"), 0.0);
    }

    #[test]
    fn test_stopword_only_sentence_is_zero_vector() {
        let vectorizer = TfIdfVectorizer::new(StopwordFilter::for_language(Language::English));
        let matrix = vectorizer.fit_transform(&sentences(&["The and of it.", "Rust compiles."]));

        assert!(matrix.vectors()[0].is_empty());
        assert!(!matrix.vectors()[1].is_empty());
    }

    #[test]
    fn test_empty_document() {
        let vectorizer = TfIdfVectorizer::new(StopwordFilter::empty());
        let matrix = vectorizer.fit_transform(&[]);

        assert!(matrix.vectors().is_empty());
        assert_eq!(matrix.vocabulary_size(), 0);
    }

    #[test]
    fn test_deterministic_output() {
        let vectorizer = TfIdfVectorizer::new(StopwordFilter::empty());
        let input = sentences(&["one two three", "two three four", "four five"]);

        let a = vectorizer.fit_transform(&input).into_vectors();
        let b = vectorizer.fit_transform(&input).into_vectors();
        assert_eq!(a, b);
    }
}
