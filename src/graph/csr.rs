//! Frozen similarity graph in Compressed Sparse Row (CSR) layout
//!
//! Power iteration walks every row once per iteration, so rows are stored
//! contiguously with their neighbors sorted by sentence index. Each row also
//! caches its total similarity mass, the denominator of the row-normalized
//! transition probabilities.

use super::builder::SimilarityGraphBuilder;

/// Sentence similarity graph in CSR layout
///
/// Row `i` holds the sentences similar to sentence `i`. The graph is
/// undirected, so every edge appears in both rows.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of sentences
    pub num_nodes: usize,
    /// Row `i` spans `offsets[i]..offsets[i + 1]`
    offsets: Vec<usize>,
    targets: Vec<u32>,
    similarities: Vec<f64>,
    /// Sum of each row's similarities
    row_mass: Vec<f64>,
}

impl CsrGraph {
    /// Freeze a builder
    pub fn from_builder(builder: &SimilarityGraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut graph = Self {
            num_nodes,
            offsets: Vec::with_capacity(num_nodes + 1),
            targets: Vec::with_capacity(builder.edge_count() * 2),
            similarities: Vec::with_capacity(builder.edge_count() * 2),
            row_mass: Vec::with_capacity(num_nodes),
        };
        graph.offsets.push(0);

        for (_, node) in builder.nodes() {
            let mut row: Vec<(u32, f64)> = node.edges.iter().map(|(&t, &w)| (t, w)).collect();
            row.sort_unstable_by_key(|&(target, _)| target);

            graph.row_mass.push(row.iter().map(|&(_, w)| w).sum());
            for (target, similarity) in row {
                graph.targets.push(target);
                graph.similarities.push(similarity);
            }
            graph.offsets.push(graph.targets.len());
        }

        graph
    }

    fn row(&self, node: u32) -> std::ops::Range<usize> {
        self.offsets[node as usize]..self.offsets[node as usize + 1]
    }

    /// Neighbors of a sentence with their similarity, by ascending index
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let row = self.row(node);
        self.targets[row.clone()]
            .iter()
            .copied()
            .zip(self.similarities[row].iter().copied())
    }

    /// Similarity between two sentences (0 when absent, including the diagonal)
    pub fn weight(&self, from: u32, to: u32) -> f64 {
        if from as usize >= self.num_nodes {
            return 0.0;
        }
        let row = self.row(from);
        self.targets[row.clone()]
            .binary_search(&to)
            .map(|i| self.similarities[row.start + i])
            .unwrap_or(0.0)
    }

    /// Number of sentences similar to `node`
    pub fn degree(&self, node: u32) -> usize {
        self.row(node).len()
    }

    /// Total similarity mass of a row
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.row_mass[node as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Stored edge entries (each undirected edge counts twice)
    pub fn num_edges(&self) -> usize {
        self.targets.len()
    }

    /// Number of distinct similar pairs
    pub fn undirected_edges(&self) -> usize {
        self.targets.len() / 2
    }

    /// Sentences similar to nothing else
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.row_mass[n as usize] <= 0.0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            offsets: vec![0],
            targets: Vec::new(),
            similarities: Vec::new(),
            row_mass: Vec::new(),
        }
    }
}
