//! Unit vector representation for sentences
//!
//! A sentence vector is sparse: only the vocabulary terms present in the
//! sentence are stored, sorted by term id so that dot products walk both
//! vectors in a fixed order.

/// A sparse, L2-normalized vector over term ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitVector {
    /// Non-zero dimensions: (term id, weight), sorted by term id
    dimensions: Vec<(u32, f64)>,
    /// L2 norm before normalization
    pub norm: f64,
}

impl UnitVector {
    /// Create a new empty (all-zero) vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from raw (term id, weight) pairs, normalizing to unit length.
    ///
    /// Duplicate ids are summed and zero weights dropped. A zero norm leaves
    /// the vector empty.
    pub fn from_dimensions(mut dimensions: Vec<(u32, f64)>) -> Self {
        dimensions.sort_by_key(|&(id, _)| id);
        dimensions.dedup_by(|next, kept| {
            if next.0 == kept.0 {
                kept.1 += next.1;
                true
            } else {
                false
            }
        });
        dimensions.retain(|&(_, w)| w != 0.0);

        let norm = Self::compute_norm(&dimensions);
        if norm > 0.0 {
            for (_, value) in dimensions.iter_mut() {
                *value /= norm;
            }
        } else {
            dimensions.clear();
        }
        Self { dimensions, norm }
    }

    /// Compute L2 norm
    fn compute_norm(dimensions: &[(u32, f64)]) -> f64 {
        dimensions.iter().map(|(_, v)| v * v).sum::<f64>().sqrt()
    }

    /// Weight of a term id (0 if absent)
    pub fn get(&self, term: u32) -> f64 {
        self.dimensions
            .binary_search_by_key(&term, |&(id, _)| id)
            .map(|i| self.dimensions[i].1)
            .unwrap_or(0.0)
    }

    /// Iterate over the non-zero dimensions in term id order
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.dimensions.iter().copied()
    }

    /// Compute cosine similarity with another vector.
    ///
    /// Both vectors are unit length (or empty), so this is the dot product,
    /// clamped into [0, 1]. Any empty vector gives 0.
    pub fn cosine_similarity(&self, other: &UnitVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut dot = 0.0;
        while i < self.dimensions.len() && j < other.dimensions.len() {
            let (a_id, a) = self.dimensions[i];
            let (b_id, b) = other.dimensions[j];
            match a_id.cmp(&b_id) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += a * b;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot.clamp(0.0, 1.0)
    }

    /// Number of non-zero dimensions
    pub fn nnz(&self) -> usize {
        self.dimensions.len()
    }

    /// Check if the vector is all zeros
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}
