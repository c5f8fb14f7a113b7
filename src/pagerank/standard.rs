//! Weighted PageRank by power iteration
//!
//! A sentence passes its score to its neighbors in proportion to their
//! similarity, divided by the row's total similarity. Sentences similar to
//! nothing spread their score evenly over the whole document, so the score
//! vector stays a probability distribution at every step.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;

/// Power-iteration PageRank over a [`CsrGraph`]
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Probability of following an edge rather than jumping (0.85)
    pub damping: f64,
    /// Upper bound on iterations
    pub max_iterations: usize,
    /// L1 change between iterations below which the scores count as converged
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl StandardPageRank {
    /// Create a StandardPageRank with damping 0.85, 100 iterations and a
    /// 1e-6 threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum number of iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the L1 convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Score every node of `graph`.
    ///
    /// Hitting the iteration bound is not an error: the last iterate is
    /// returned with `converged == false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        match n {
            0 => return PageRankResult::new(Vec::new(), 0, 0.0, true),
            1 => return PageRankResult::new(vec![1.0], 0, 0.0, true),
            _ => {}
        }

        let uniform = 1.0 / n as f64;
        let jump = (1.0 - self.damping) * uniform;
        let dangling = graph.dangling_nodes();

        // Share of a node's score that each unit of similarity carries
        let spread: Vec<f64> = (0..n as u32)
            .map(|node| match graph.node_total_weight(node) {
                mass if mass > 0.0 => self.damping / mass,
                _ => 0.0,
            })
            .collect();

        let mut scores = vec![uniform; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            let dangling_mass: f64 = dangling.iter().map(|&d| scores[d as usize]).sum();
            next.fill(jump + self.damping * dangling_mass * uniform);

            for (node, (&score, &factor)) in scores.iter().zip(&spread).enumerate() {
                if factor == 0.0 {
                    continue;
                }
                for (neighbor, similarity) in graph.neighbors(node as u32) {
                    next[neighbor as usize] += factor * score * similarity;
                }
            }

            delta = scores.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
            std::mem::swap(&mut scores, &mut next);
        }

        // Guard against drift in the last bits
        let total: f64 = scores.iter().sum();
        if total > 0.0 {
            scores.iter_mut().for_each(|s| *s /= total);
        }

        let converged = delta <= self.threshold;

        #[cfg(feature = "tracing")]
        {
            if !converged {
                tracing::warn!(
                    iterations,
                    delta,
                    threshold = self.threshold,
                    "pagerank stopped at the iteration bound before converging"
                );
            }
        }

        PageRankResult::new(scores, iterations, delta, converged)
    }
}
