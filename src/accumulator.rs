//! Accumulator: running per-feature sums for class-mean initialization.
//!
//! Each class gets one accumulator while the training set is scanned once.
//! Nothing is kept afterwards except the resulting mean vectors, which seed
//! the prototype table.

/// A running sum-and-count over feature vectors of fixed dimensionality.
#[derive(Clone, Debug)]
pub struct Accumulator {
    /// Running sum of all vectors
    sums: Vec<f64>,
    /// Number of vectors accumulated
    count: usize,
}

impl Accumulator {
    /// Create a new empty accumulator.
    pub fn new(dimensions: usize) -> Self {
        Self {
            sums: vec![0.0; dimensions],
            count: 0,
        }
    }

    /// Get the dimensionality.
    pub fn dimensions(&self) -> usize {
        self.sums.len()
    }

    /// Get the number of accumulated vectors.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Add a feature vector to the running sums.
    pub fn add(&mut self, features: &[f64]) {
        assert_eq!(
            self.dimensions(),
            features.len(),
            "Dimension mismatch in accumulator"
        );

        for (sum, &v) in self.sums.iter_mut().zip(features) {
            *sum += v;
        }
        self.count += 1;
    }

    /// Per-feature arithmetic mean of everything added so far.
    ///
    /// An empty accumulator yields the zero vector.
    pub fn mean(&self) -> Vec<f64> {
        if self.count == 0 {
            return vec![0.0; self.dimensions()];
        }
        let n = self.count as f64;
        self.sums.iter().map(|&s| s / n).collect()
    }
}
