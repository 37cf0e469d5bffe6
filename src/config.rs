//! Training hyperparameters.
//!
//! The learning rate starts at `alpha` and shrinks geometrically: after every
//! full pass over the training set it is multiplied by `decay`. Training runs
//! for a fixed number of `epochs`, so runtime is `epochs × samples` updates
//! regardless of the data.
//!
//! # Example
//!
//! ```rust
//! use lvq::LvqConfig;
//!
//! let config = LvqConfig::default().with_epochs(50).with_decay(0.9);
//! assert_eq!(config.epochs, 50);
//!
//! let parsed = LvqConfig::from_json(r#"{"alpha": 0.05}"#).unwrap();
//! assert_eq!(parsed.alpha, 0.05);
//! assert_eq!(parsed.epochs, 20);
//! ```

use crate::error::{LvqError, Result};
use serde::{Deserialize, Serialize};

/// Default initial learning rate.
pub const DEFAULT_ALPHA: f64 = 0.1;
/// Default per-epoch multiplicative shrink of the learning rate.
pub const DEFAULT_DECAY: f64 = 0.95;
/// Default number of full passes over the training set.
pub const DEFAULT_EPOCHS: usize = 20;

/// LVQ1 training configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LvqConfig {
    /// Initial step size
    pub alpha: f64,
    /// Per-epoch multiplicative shrink of alpha
    pub decay: f64,
    /// Number of full passes over the training set
    pub epochs: usize,
}

impl LvqConfig {
    /// Create a configuration with the default hyperparameters.
    pub fn new() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            decay: DEFAULT_DECAY,
            epochs: DEFAULT_EPOCHS,
        }
    }

    /// Set the initial learning rate.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the per-epoch decay factor.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Set the number of training epochs.
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Parse a configuration from a JSON object.
    ///
    /// Missing keys take their defaults. The result is validated before it
    /// is returned.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the hyperparameters describe a usable schedule.
    ///
    /// `alpha` and `decay` must both lie in `(0, 1]`.
    /// Any epoch count is accepted; zero epochs leaves the class means as
    /// the final prototypes.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(LvqError::InvalidConfig(format!(
                "alpha must lie in (0, 1], got {}",
                self.alpha
            )));
        }
        if !self.decay.is_finite() || self.decay <= 0.0 || self.decay > 1.0 {
            return Err(LvqError::InvalidConfig(format!(
                "decay must lie in (0, 1], got {}",
                self.decay
            )));
        }
        Ok(())
    }

    /// Learning rate in effect during `epoch` (zero-based).
    ///
    /// Closed form of the schedule: `alpha * decay^epoch`.
    pub fn learning_rate(&self, epoch: usize) -> f64 {
        let exponent = i32::try_from(epoch).unwrap_or(i32::MAX);
        self.alpha * self.decay.powi(exponent)
    }
}

impl Default for LvqConfig {
    fn default() -> Self {
        Self::new()
    }
}
