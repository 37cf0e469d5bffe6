//! Prototypes: one representative vector per class.
//!
//! The [`PrototypeTable`] is seeded with class means and then moved around by
//! the LVQ1 update rule. Table order is the order in which labels first
//! appear in the training data; nearest-prototype ties resolve to the
//! earlier entry, so this order is part of the model's observable behaviour.

use crate::accumulator::Accumulator;
use crate::dataset::Dataset;
use crate::distance::Distance;
use std::collections::HashMap;

/// A class label and its current position in feature space.
#[derive(Clone, Debug, PartialEq)]
pub struct Prototype {
    label: String,
    weights: Vec<f64>,
}

impl Prototype {
    /// Create a prototype for `label` at `weights`.
    pub fn new(label: impl Into<String>, weights: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            weights,
        }
    }

    /// Get the class label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the current position in feature space.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Get the dimensionality.
    pub fn dimensions(&self) -> usize {
        self.weights.len()
    }

    /// Move toward `x`: `w[j] += alpha * (x[j] - w[j])`.
    pub fn attract(&mut self, x: &[f64], alpha: f64) {
        debug_assert_eq!(self.weights.len(), x.len());
        for (w, &xj) in self.weights.iter_mut().zip(x) {
            *w += alpha * (xj - *w);
        }
    }

    /// Move away from `x`: `w[j] -= alpha * (x[j] - w[j])`.
    pub fn repel(&mut self, x: &[f64], alpha: f64) {
        debug_assert_eq!(self.weights.len(), x.len());
        for (w, &xj) in self.weights.iter_mut().zip(x) {
            *w -= alpha * (xj - *w);
        }
    }
}

/// Exactly one prototype per distinct training label.
#[derive(Clone, Debug, PartialEq)]
pub struct PrototypeTable {
    prototypes: Vec<Prototype>,
    dimensions: usize,
}

impl PrototypeTable {
    /// Seed one prototype per label with the per-feature mean of that
    /// label's samples.
    pub fn from_class_means(dataset: &Dataset) -> Self {
        let dimensions = dataset.dimensions();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut classes: Vec<(&str, Accumulator)> = Vec::new();

        for sample in dataset {
            let slot = *index.entry(sample.label()).or_insert_with(|| {
                classes.push((sample.label(), Accumulator::new(dimensions)));
                classes.len() - 1
            });
            classes[slot].1.add(sample.features());
        }

        let prototypes = classes
            .into_iter()
            .map(|(label, acc)| Prototype::new(label, acc.mean()))
            .collect();

        Self {
            prototypes,
            dimensions,
        }
    }

    /// Number of prototypes (one per class).
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    /// Always false: tables are built from non-empty datasets.
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Get the dimensionality.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// All prototypes in table order.
    pub fn prototypes(&self) -> &[Prototype] {
        &self.prototypes
    }

    /// Get the prototype at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Prototype> {
        self.prototypes.get(index)
    }

    /// Labels in table order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.prototypes.iter().map(Prototype::label)
    }

    /// Index and squared distance of the winner for `x`.
    pub fn nearest(&self, x: &[f64]) -> (usize, f64) {
        Distance::nearest(self.prototypes.iter().map(Prototype::weights), x)
            .expect("prototype table is never empty")
    }

    /// Apply one LVQ1 step for a labeled sample.
    ///
    /// The winner is attracted when its label matches `label` and repelled
    /// otherwise. Returns whether the winner's label matched.
    pub fn update(&mut self, x: &[f64], label: &str, alpha: f64) -> bool {
        let (winner, _) = self.nearest(x);
        let prototype = &mut self.prototypes[winner];
        let matched = prototype.label == label;
        if matched {
            prototype.attract(x, alpha);
        } else {
            prototype.repel(x, alpha);
        }
        matched
    }
}
