//! Sentence similarity graph builder
//!
//! Nodes are sentences (node id = sentence index). Two nodes are joined by an
//! undirected edge weighted with the cosine similarity of their term vectors;
//! pairs with zero similarity get no edge and a node never links to itself.

use crate::summarizer::unit_vector::UnitVector;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// A node in the graph builder
#[derive(Debug, Clone, Default)]
pub struct BuilderNode {
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

/// A mutable graph builder optimized for incremental construction
#[derive(Debug, Default)]
pub struct SimilarityGraphBuilder {
    nodes: Vec<BuilderNode>,
}

impl SimilarityGraphBuilder {
    /// Create a builder with `num_nodes` isolated nodes
    pub fn new(num_nodes: usize) -> Self {
        Self {
            nodes: vec![BuilderNode::default(); num_nodes],
        }
    }

    /// Increment the edge weight between two nodes
    ///
    /// The edge is stored in both directions. Self-loops and non-positive
    /// weights are ignored.
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to || !(weight > 0.0) {
            return;
        }

        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0.0) += weight;
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            *node.edges.entry(from).or_insert(0.0) += weight;
        }
    }

    /// Build the similarity graph for a sequence of sentence vectors
    pub fn from_vectors(vectors: &[UnitVector]) -> Self {
        let mut builder = Self::new(vectors.len());
        for i in 0..vectors.len() {
            for j in (i + 1)..vectors.len() {
                let weight = vectors[i].cosine_similarity(&vectors[j]);
                builder.increment_edge(i as u32, j as u32, weight);
            }
        }
        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Build the similarity graph, computing rows in parallel for large documents
///
/// Below `parallel_threshold` sentences the sequential builder is used. Each
/// row is computed independently and merged in row order, so both paths give
/// the same graph.
pub fn build_graph_parallel(
    vectors: &[UnitVector],
    parallel_threshold: usize,
) -> SimilarityGraphBuilder {
    if vectors.len() < parallel_threshold.max(2) {
        return SimilarityGraphBuilder::from_vectors(vectors);
    }

    let rows: Vec<Vec<(u32, f64)>> = (0..vectors.len())
        .into_par_iter()
        .map(|i| {
            ((i + 1)..vectors.len())
                .filter_map(|j| {
                    let weight = vectors[i].cosine_similarity(&vectors[j]);
                    (weight > 0.0).then_some((j as u32, weight))
                })
                .collect()
        })
        .collect();

    let mut builder = SimilarityGraphBuilder::new(vectors.len());
    for (i, row) in rows.into_iter().enumerate() {
        for (j, weight) in row {
            builder.increment_edge(i as u32, j, weight);
        }
    }

    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(dims: &[(u32, f64)]) -> UnitVector {
        UnitVector::from_dimensions(dims.to_vec())
    }

    fn sample_vectors() -> Vec<UnitVector> {
        vec![
            vector(&[(0, 1.0), (1, 1.0)]),
            vector(&[(0, 1.0), (2, 1.0)]),
            vector(&[(3, 1.0)]),
            UnitVector::new(),
        ]
    }

    #[test]
    fn test_edge_incrementing() {
        let mut builder = SimilarityGraphBuilder::new(2);

        builder.increment_edge(0, 1, 0.5);
        builder.increment_edge(0, 1, 0.25);

        assert_eq!(builder.get_node(0).unwrap().edges.get(&1), Some(&0.75));
        assert_eq!(builder.get_node(1).unwrap().edges.get(&0), Some(&0.75));
    }

    #[test]
    fn test_self_loops_prevented() {
        let mut builder = SimilarityGraphBuilder::new(1);
        builder.increment_edge(0, 0, 1.0);

        assert!(builder.get_node(0).unwrap().edges.is_empty());
    }

    #[test]
    fn test_zero_weight_ignored() {
        let mut builder = SimilarityGraphBuilder::new(2);
        builder.increment_edge(0, 1, 0.0);
        builder.increment_edge(0, 1, f64::NAN);

        assert_eq!(builder.edge_count(), 0);
    }

    #[test]
    fn test_from_vectors() {
        let builder = SimilarityGraphBuilder::from_vectors(&sample_vectors());

        assert_eq!(builder.node_count(), 4);
        assert_eq!(builder.edge_count(), 1);

        let weight = builder.get_node(0).unwrap().edges[&1];
        assert!((weight - 0.5).abs() < 1e-9);
        assert!(builder.get_node(2).unwrap().edges.is_empty());
        assert!(builder.get_node(3).unwrap().edges.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let vectors: Vec<UnitVector> = (0..40u32)
            .map(|i| vector(&[(i % 7, 1.0), (i % 5 + 10, 2.0), (i % 3 + 20, 0.5)]))
            .collect();

        let sequential = SimilarityGraphBuilder::from_vectors(&vectors);
        let parallel = build_graph_parallel(&vectors, 2);

        assert_eq!(sequential.node_count(), parallel.node_count());
        assert_eq!(sequential.edge_count(), parallel.edge_count());
        for ((_, a), (_, b)) in sequential.nodes().zip(parallel.nodes()) {
            assert_eq!(a.edges, b.edges);
        }
    }

    #[test]
    fn test_empty_and_single() {
        assert!(SimilarityGraphBuilder::from_vectors(&[]).is_empty());

        let single = build_graph_parallel(&[vector(&[(0, 1.0)])], 1);
        assert_eq!(single.node_count(), 1);
        assert_eq!(single.edge_count(), 0);
    }
}
