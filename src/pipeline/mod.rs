//! Summarization pipeline
//!
//! The runner executes the stages for one document; the observer module
//! provides hooks for watching them.

pub mod observer;
pub mod runner;
