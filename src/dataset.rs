//! Labeled training data.
//!
//! A [`Dataset`] is built from two parallel collections (feature vectors and
//! labels) and is only constructible when the input is well formed: at least
//! one sample, equal collection lengths, one shared dimensionality `D >= 1`
//! and finite feature values.

use crate::error::{LvqError, Result};

/// One feature vector paired with its class label.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    features: Vec<f64>,
    label: String,
}

impl Sample {
    /// Create a sample from features and a label.
    pub fn new(features: Vec<f64>, label: impl Into<String>) -> Self {
        Self {
            features,
            label: label.into(),
        }
    }

    /// Get the feature values.
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// Get the class label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the dimensionality.
    pub fn dimensions(&self) -> usize {
        self.features.len()
    }
}

/// A validated, non-empty set of samples sharing one dimensionality.
#[derive(Clone, Debug)]
pub struct Dataset {
    samples: Vec<Sample>,
    dimensions: usize,
}

impl Dataset {
    /// Pair up feature vectors with labels.
    ///
    /// # Errors
    /// [`LvqError::InvalidInput`] when either collection is empty, the
    /// lengths differ, a sample has zero features or a different length
    /// than the first one, or a feature is NaN or infinite.
    pub fn new<V, L>(samples: &[V], labels: &[L]) -> Result<Self>
    where
        V: AsRef<[f64]>,
        L: AsRef<str>,
    {
        if samples.is_empty() {
            return Err(LvqError::InvalidInput("no samples given".into()));
        }
        if labels.is_empty() {
            return Err(LvqError::InvalidInput("no labels given".into()));
        }
        if samples.len() != labels.len() {
            return Err(LvqError::InvalidInput(format!(
                "{} samples but {} labels",
                samples.len(),
                labels.len()
            )));
        }

        let dimensions = samples[0].as_ref().len();
        if dimensions == 0 {
            return Err(LvqError::InvalidInput(
                "samples must have at least one feature".into(),
            ));
        }

        let mut paired = Vec::with_capacity(samples.len());
        for (i, (features, label)) in samples.iter().zip(labels).enumerate() {
            let features = features.as_ref();
            if features.len() != dimensions {
                return Err(LvqError::InvalidInput(format!(
                    "sample {} has {} features, expected {}",
                    i,
                    features.len(),
                    dimensions
                )));
            }
            ensure_finite(features, i)?;
            paired.push(Sample::new(features.to_vec(), label.as_ref()));
        }

        Ok(Self {
            samples: paired,
            dimensions,
        })
    }

    /// All samples in input order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: a dataset holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Shared feature dimensionality `D`.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Iterate over samples in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Reject NaN and infinite features of the sample at `index`.
fn ensure_finite(features: &[f64], index: usize) -> Result<()> {
    if let Some(j) = features.iter().position(|v| !v.is_finite()) {
        return Err(LvqError::InvalidInput(format!(
            "sample {} has non-finite feature {} ({})",
            index, j, features[j]
        )));
    }
    Ok(())
}
