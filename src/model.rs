//! LvqModel: LVQ1 training and nearest-prototype classification.
//!
//! Construction seeds one prototype per class with the class mean and then
//! trains in place. Every epoch visits the samples in their original order;
//! each sample pulls its nearest prototype closer when the labels agree and
//! pushes it away when they do not. The learning rate is multiplied by
//! `decay` after every epoch. Updates within an epoch are strictly
//! sequential because each one sees the table as left by the previous one.
//!
//! # Example
//!
//! ```rust
//! use lvq::LvqModel;
//!
//! # fn main() -> lvq::Result<()> {
//! let samples = [[0.0, 0.1], [0.1, 0.0], [5.0, 5.1], [5.1, 5.0]];
//! let labels = ["low", "low", "high", "high"];
//!
//! let model = LvqModel::new(&samples, &labels)?;
//! assert_eq!(model.predict(&[0.2, 0.2])?, "low");
//! assert_eq!(model.predict(&[4.8, 5.3])?, "high");
//! # Ok(())
//! # }
//! ```

use crate::config::LvqConfig;
use crate::dataset::Dataset;
use crate::distance::Distance;
use crate::error::{LvqError, Result};
use crate::evaluation::{Evaluation, Outcome};
use crate::prototype::{Prototype, PrototypeTable};
use tracing::{debug, info, trace};

/// What happened during one training epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpochStats {
    /// Zero-based epoch index
    pub epoch: usize,
    /// Learning rate used throughout this epoch
    pub alpha: f64,
    /// Updates where the winner's label matched the sample
    pub attracted: usize,
    /// Updates where the winner belonged to another class
    pub repelled: usize,
}

/// A trained LVQ1 classifier.
///
/// The prototype table is frozen once construction returns; every query
/// method takes `&self`.
#[derive(Clone, Debug)]
pub struct LvqModel {
    table: PrototypeTable,
    config: LvqConfig,
    history: Vec<EpochStats>,
    final_alpha: f64,
}

impl LvqModel {
    /// Train a model with the default configuration.
    ///
    /// # Errors
    /// [`LvqError::InvalidInput`] for empty, mismatched, ragged or
    /// non-finite input.
    pub fn new<V, L>(samples: &[V], labels: &[L]) -> Result<Self>
    where
        V: AsRef<[f64]>,
        L: AsRef<str>,
    {
        Self::with_config(samples, labels, LvqConfig::default())
    }

    /// Train a model with an explicit configuration.
    ///
    /// # Errors
    /// [`LvqError::InvalidConfig`] if `config` does not validate, otherwise
    /// as [`LvqModel::new`].
    pub fn with_config<V, L>(samples: &[V], labels: &[L], config: LvqConfig) -> Result<Self>
    where
        V: AsRef<[f64]>,
        L: AsRef<str>,
    {
        let dataset = Dataset::new(samples, labels)?;
        Self::from_dataset(&dataset, config)
    }

    /// Train a model on an already validated dataset.
    ///
    /// # Errors
    /// [`LvqError::InvalidConfig`] if `config` does not validate.
    pub fn from_dataset(dataset: &Dataset, config: LvqConfig) -> Result<Self> {
        config.validate()?;

        let mut model = Self {
            table: PrototypeTable::from_class_means(dataset),
            config,
            history: Vec::new(),
            final_alpha: config.alpha,
        };
        model.train(dataset);
        Ok(model)
    }

    fn train(&mut self, dataset: &Dataset) {
        let mut alpha = self.config.alpha;

        for epoch in 0..self.config.epochs {
            let mut attracted = 0;
            let mut repelled = 0;

            for sample in dataset {
                if self.table.update(sample.features(), sample.label(), alpha) {
                    attracted += 1;
                } else {
                    repelled += 1;
                }
            }

            debug!(epoch, alpha, attracted, repelled, "lvq epoch complete");
            self.history.push(EpochStats {
                epoch,
                alpha,
                attracted,
                repelled,
            });
            alpha *= self.config.decay;
        }

        self.final_alpha = alpha;
        info!(
            classes = self.table.len(),
            samples = dataset.len(),
            dimensions = self.table.dimensions(),
            epochs = self.config.epochs,
            final_alpha = alpha,
            "lvq training finished"
        );
    }

    /// Predict the label of the prototype nearest to `input`.
    ///
    /// # Errors
    /// [`LvqError::DimensionMismatch`] if `input.len()` differs from the
    /// training dimensionality, [`LvqError::InvalidInput`] if `input`
    /// contains NaN or infinite values.
    pub fn predict(&self, input: &[f64]) -> Result<&str> {
        let (winner, _) = self.nearest(input)?;
        trace!(
            label = winner.label(),
            distance = Distance::euclidean(winner.weights(), input),
            "lvq prediction"
        );
        Ok(winner.label())
    }

    /// Predict every input in order, stopping at the first invalid one.
    pub fn predict_batch<V: AsRef<[f64]>>(&self, inputs: &[V]) -> Result<Vec<&str>> {
        inputs
            .iter()
            .map(|input| self.predict(input.as_ref()))
            .collect()
    }

    /// The winning prototype for `input` and its squared distance.
    pub fn nearest(&self, input: &[f64]) -> Result<(&Prototype, f64)> {
        self.check_input(input)?;

        let (index, dist) = self.table.nearest(input);
        Ok((&self.table.prototypes()[index], dist))
    }

    /// Classify labeled test samples and tally the results.
    ///
    /// # Errors
    /// As [`Dataset::new`] for malformed input, plus
    /// [`LvqError::DimensionMismatch`] when the test dimensionality differs
    /// from the model's.
    pub fn evaluate<V, L>(&self, samples: &[V], labels: &[L]) -> Result<Evaluation>
    where
        V: AsRef<[f64]>,
        L: AsRef<str>,
    {
        let dataset = Dataset::new(samples, labels)?;
        if dataset.dimensions() != self.dimensions() {
            return Err(LvqError::DimensionMismatch {
                expected: self.dimensions(),
                got: dataset.dimensions(),
            });
        }

        let outcomes = dataset
            .iter()
            .map(|sample| -> Result<Outcome> {
                let predicted = self.predict(sample.features())?;
                Ok(Outcome::new(predicted, sample.label()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Evaluation::new(outcomes))
    }

    fn check_input(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.dimensions() {
            return Err(LvqError::DimensionMismatch {
                expected: self.dimensions(),
                got: input.len(),
            });
        }
        if let Some(j) = input.iter().position(|v| !v.is_finite()) {
            return Err(LvqError::InvalidInput(format!(
                "query has non-finite feature {} ({})",
                j, input[j]
            )));
        }
        Ok(())
    }

    /// Feature dimensionality `D` the model was trained on.
    pub fn dimensions(&self) -> usize {
        self.table.dimensions()
    }

    /// Trained prototypes in table order.
    pub fn prototypes(&self) -> &[Prototype] {
        self.table.prototypes()
    }

    /// The frozen prototype table.
    pub fn table(&self) -> &PrototypeTable {
        &self.table
    }

    /// Class labels in table (tie-break) order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.table.labels()
    }

    /// Configuration the model was trained with.
    pub fn config(&self) -> &LvqConfig {
        &self.config
    }

    /// Per-epoch training statistics, one entry per epoch.
    pub fn history(&self) -> &[EpochStats] {
        &self.history
    }

    /// Learning rate left after the last epoch: `alpha * decay^epochs`.
    pub fn final_alpha(&self) -> f64 {
        self.final_alpha
    }
}
