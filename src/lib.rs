//! # LVQ: Nearest-Prototype Classification
//!
//! A Learning Vector Quantization (LVQ1) classifier. One prototype vector is
//! learned per class from labeled examples; new inputs are classified by the
//! label of the nearest prototype.
//!
//! ## Quick Start
//!
//! ```rust
//! use lvq::{LvqConfig, LvqModel};
//!
//! # fn main() -> lvq::Result<()> {
//! let samples = [
//!     [0.1, 0.2, 0.3, 0.4],
//!     [0.12, 0.18, 0.33, 0.42],
//!     [0.9, 0.8, 0.7, 0.6],
//!     [0.88, 0.82, 0.73, 0.61],
//! ];
//! let labels = ["blue", "blue", "red", "red"];
//!
//! let config = LvqConfig::default().with_epochs(20);
//! let model = LvqModel::with_config(&samples, &labels, config)?;
//!
//! assert_eq!(model.predict(&[0.11, 0.21, 0.29, 0.41])?, "blue");
//!
//! let eval = model.evaluate(&[[0.89, 0.81, 0.72, 0.62]], &["red"])?;
//! println!("{}", eval); // Accuracy: 100.00%
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! - **Prototype**: a representative vector for one class, seeded with the
//!   class mean
//! - **Winner**: the prototype nearest to a vector (squared Euclidean)
//! - **Epoch**: one pass over the training set, one update per sample
//! - **Alpha**: the step size, multiplied by `decay` after every epoch

pub mod accumulator;
pub mod config;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod model;
pub mod prototype;

// Re-exports for convenience
pub use accumulator::Accumulator;
pub use config::LvqConfig;
pub use dataset::{Dataset, Sample};
pub use distance::Distance;
pub use error::{LvqError, Result};
pub use evaluation::{Evaluation, Outcome};
pub use model::{EpochStats, LvqModel};
pub use prototype::{Prototype, PrototypeTable};

#[cfg(test)]
mod tests {
    use super::*;

    const TRAIN: [[f64; 4]; 9] = [
        [0.1, 0.2, 0.3, 0.4],
        [0.12, 0.18, 0.33, 0.42],
        [0.9, 0.8, 0.7, 0.6],
        [0.88, 0.82, 0.73, 0.61],
        [0.5, 0.5, 0.5, 0.5],
        [0.52, 0.48, 0.49, 0.51],
        [0.3, 0.7, 0.6, 0.2],
        [0.31, 0.69, 0.61, 0.19],
        [11.2, 10.3, 13.4, 15.2],
    ];
    const TRAIN_LABELS: [&str; 9] = [
        "blue", "blue", "red", "red", "green", "green", "yellow", "yellow", "black",
    ];

    #[test]
    fn test_model_creation() {
        let model = LvqModel::new(&TRAIN, &TRAIN_LABELS).unwrap();
        assert_eq!(model.dimensions(), 4);
        assert_eq!(model.prototypes().len(), 5);
    }

    #[test]
    fn test_deterministic_training() {
        let a = LvqModel::new(&TRAIN, &TRAIN_LABELS).unwrap();
        let b = LvqModel::new(&TRAIN, &TRAIN_LABELS).unwrap();
        assert_eq!(a.table(), b.table());
    }

    #[test]
    fn test_separated_clusters_train_without_repulsion() {
        let model = LvqModel::new(&TRAIN, &TRAIN_LABELS).unwrap();
        assert!(model.history().iter().all(|s| s.repelled == 0));
    }

    #[test]
    fn test_singleton_class_stays_on_its_sample() {
        let model = LvqModel::new(&TRAIN, &TRAIN_LABELS).unwrap();
        let black = model
            .prototypes()
            .iter()
            .find(|p| p.label() == "black")
            .unwrap();
        assert_eq!(black.weights(), &[11.2, 10.3, 13.4, 15.2]);
    }
}
