//! Accuracy reporting for a trained model.

use std::fmt;

/// One classified test sample.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    predicted: String,
    actual: String,
}

impl Outcome {
    /// Create an outcome from a predicted and an expected label.
    pub fn new(predicted: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            predicted: predicted.into(),
            actual: actual.into(),
        }
    }

    /// Get the predicted label.
    pub fn predicted(&self) -> &str {
        &self.predicted
    }

    /// Get the expected label.
    pub fn actual(&self) -> &str {
        &self.actual
    }

    /// Whether the prediction matched the expected label.
    pub fn is_correct(&self) -> bool {
        self.predicted == self.actual
    }
}

/// Per-sample outcomes of an evaluation run, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    outcomes: Vec<Outcome>,
}

impl Evaluation {
    /// Create an evaluation from per-sample outcomes.
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        Self { outcomes }
    }

    /// Get the per-sample outcomes.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Number of evaluated samples.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of correct predictions.
    pub fn correct(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_correct()).count()
    }

    /// `correct / total`, or 0.0 for an empty evaluation.
    pub fn accuracy(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.correct() as f64 / self.total() as f64
    }

    /// Accuracy as a percentage.
    pub fn accuracy_percent(&self) -> f64 {
        self.accuracy() * 100.0
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Accuracy: {:.2}%", self.accuracy_percent())
    }
}
