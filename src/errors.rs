//! Error types for the summarization pipeline
//!
//! Every failure is deterministic for a given input, so none of these are
//! retried internally.

use thiserror::Error;

/// Errors produced by the summarization pipeline
#[derive(Debug, Error)]
pub enum TextRankError {
    /// The declared or detected language has no segmentation rule
    #[error("unsupported language: {tag:?}")]
    UnsupportedLanguage {
        /// The tag as it was received
        tag: String,
    },

    /// No sentence survived segmentation
    #[error("input text contains no sentences")]
    EmptyInput,

    /// A call argument is out of range
    #[error("invalid parameter `{name}`: {message}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// The document exceeds the configured sentence limit
    #[error("document has {sentences} sentences, limit is {limit}")]
    DocumentTooLarge {
        /// Sentences found after segmentation
        sentences: usize,
        /// Configured `max_sentences`
        limit: usize,
    },

    /// The configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration could not be parsed from JSON
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl TextRankError {
    /// Create an unsupported-language error for `tag`
    pub fn unsupported_language(tag: impl Into<String>) -> Self {
        Self::UnsupportedLanguage { tag: tag.into() }
    }

    /// Create an invalid-parameter error
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Create an invalid-config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TextRankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TextRankError::unsupported_language("fr");
        assert_eq!(err.to_string(), "unsupported language: \"fr\"");

        let err = TextRankError::invalid_parameter("sentence_count", "must be >= 1");
        assert_eq!(
            err.to_string(),
            "invalid parameter `sentence_count`: must be >= 1"
        );

        let err = TextRankError::DocumentTooLarge {
            sentences: 12,
            limit: 10,
        };
        assert_eq!(err.to_string(), "document has 12 sentences, limit is 10");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: TextRankError = parse.unwrap_err().into();
        assert!(matches!(err, TextRankError::ConfigParse(_)));
    }
}
