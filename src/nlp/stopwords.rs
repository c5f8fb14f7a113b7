//! Stopword filtering
//!
//! English uses the `stop-words` crate list; Korean uses a small fixed list of
//! particles and markers. Filters are plain values built per call, never
//! shared global tables.

use crate::types::Language;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Common Korean particles and markers
const KOREAN_STOPWORDS: &[&str] = &[
    "의", "가", "이", "은", "들", "는", "좀", "잘", "걍", "과", "도", "를", "으로", "자", "에",
    "와", "한", "하다",
];

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
    /// Whether the filter is case-sensitive
    case_sensitive: bool,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::for_language(Language::English)
    }
}

impl StopwordFilter {
    /// Create the stopword filter for a supported language
    pub fn for_language(language: Language) -> Self {
        let stopwords = match language {
            Language::English => get(LANGUAGE::English)
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
            Language::Korean => KOREAN_STOPWORDS.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            stopwords,
            case_sensitive: false,
        }
    }

    /// Create the stopword filter for a raw language tag.
    ///
    /// Unrecognized tags give an empty filter rather than an error; filtering
    /// only sharpens the term weights.
    pub fn for_tag(tag: &str) -> Self {
        match Language::from_tag(tag) {
            Ok(language) => Self::for_language(language),
            Err(_) => Self::empty(),
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
            case_sensitive: false,
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self {
            stopwords,
            case_sensitive: false,
        }
    }

    /// Set case sensitivity
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stopwords.contains(word)
        } else {
            self.stopwords.contains(&word.to_lowercase())
        }
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::for_language(Language::English);

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("is"));
        assert!(filter.is_stopword("and"));
        assert!(!filter.is_stopword("summarization"));
        assert!(!filter.is_stopword("machine"));
    }

    #[test]
    fn test_korean_stopwords() {
        let filter = StopwordFilter::for_language(Language::Korean);

        assert!(filter.is_stopword("의"));
        assert!(filter.is_stopword("으로"));
        assert!(filter.is_stopword("하다"));
        assert!(!filter.is_stopword("고양이"));
        assert_eq!(filter.len(), KOREAN_STOPWORDS.len());
    }

    #[test]
    fn test_unknown_tag_is_empty() {
        assert!(StopwordFilter::for_tag("fr").is_empty());
        assert!(StopwordFilter::for_tag("").is_empty());
        assert!(!StopwordFilter::for_tag("en-GB").is_empty());
        assert!(StopwordFilter::for_tag("ko").is_stopword("는"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("WORDS"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_stopwords(&["custom"]);
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_add_owned_stopwords() {
        let mut filter = StopwordFilter::empty();
        let extra = vec!["Lorem".to_string(), "ipsum".to_string()];
        filter.add_stopwords(&extra);

        assert!(filter.is_stopword("lorem"));
        assert!(filter.is_stopword("IPSUM"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_case_sensitivity() {
        let filter = StopwordFilter::for_language(Language::English).with_case_sensitive(true);

        assert!(filter.is_stopword("the"));
        assert!(!filter.is_stopword("The"));
    }
}
