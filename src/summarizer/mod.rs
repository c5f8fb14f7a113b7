//! Summarization components
//!
//! Sentences are turned into TF-IDF unit vectors, ranked through the
//! similarity graph, and the top-scoring ones are selected verbatim.

pub mod extractive;
pub mod selector;
pub mod tfidf;
pub mod unit_vector;
