//! Term tokenization
//!
//! Splits a sentence on Unicode word boundaries and keeps the lowercased
//! words that can carry weight: long enough, not pure punctuation, and not a
//! stopword.

use super::stopwords::StopwordFilter;
use unicode_segmentation::UnicodeSegmentation;

/// Word-boundary tokenizer producing normalized terms
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum number of characters for a term
    min_chars: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self { min_chars: 2 }
    }
}

impl Tokenizer {
    /// Create a tokenizer with the default minimum term length (2)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum term length in characters
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars.max(1);
        self
    }

    /// Iterate over the terms of `sentence` that survive filtering
    pub fn terms<'a>(
        &'a self,
        sentence: &'a str,
        stopwords: &'a StopwordFilter,
    ) -> impl Iterator<Item = String> + 'a {
        sentence
            .unicode_words()
            .filter(|word| word.chars().any(char::is_alphanumeric))
            .map(str::to_lowercase)
            .filter(move |word| word.chars().count() >= self.min_chars)
            .filter(move |word| !stopwords.is_stopword(word))
    }
}
