//! Natural Language Processing components
//!
//! This module provides sentence segmentation, term tokenization, stopword
//! filtering, and the language detection seam.

pub mod detect;
pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;
