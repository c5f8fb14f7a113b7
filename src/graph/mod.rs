//! Graph construction and representation
//!
//! This module builds the sentence similarity graph and freezes it into CSR
//! form for PageRank.

pub mod builder;
pub mod csr;
