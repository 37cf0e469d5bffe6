//! Property-based tests using proptest.
//!
//! These tests verify invariants of training and prediction over random
//! labeled datasets.

use lvq::{Distance, LvqConfig, LvqError, LvqModel};
use proptest::prelude::*;

const DIM: usize = 3;
const LABELS: [&str; 4] = ["a", "b", "c", "d"];

// Strategy for generating labeled datasets of fixed dimensionality
fn dataset_strategy() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<&'static str>)> {
    proptest::collection::vec(
        (
            proptest::collection::vec(-100.0f64..100.0, DIM),
            0..LABELS.len(),
        ),
        1..20,
    )
    .prop_map(|rows| {
        let (samples, labels): (Vec<Vec<f64>>, Vec<&'static str>) = rows
            .into_iter()
            .map(|(features, label)| (features, LABELS[label]))
            .unzip();
        (samples, labels)
    })
}

fn vector_strategy(len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-100.0f64..100.0, len)
}

fn config_strategy() -> impl Strategy<Value = LvqConfig> {
    (0.01f64..0.5, 0.5f64..=1.0, 0usize..10).prop_map(|(alpha, decay, epochs)| {
        LvqConfig::new()
            .with_alpha(alpha)
            .with_decay(decay)
            .with_epochs(epochs)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn training_is_deterministic(
        (samples, labels) in dataset_strategy(),
        config in config_strategy(),
        query in vector_strategy(DIM),
    ) {
        let a = LvqModel::with_config(&samples, &labels, config).unwrap();
        let b = LvqModel::with_config(&samples, &labels, config).unwrap();
        prop_assert_eq!(a.table(), b.table());
        prop_assert_eq!(a.predict(&query).unwrap(), b.predict(&query).unwrap());
    }

    #[test]
    fn prediction_returns_training_label(
        (samples, labels) in dataset_strategy(),
        config in config_strategy(),
        query in vector_strategy(DIM),
    ) {
        let model = LvqModel::with_config(&samples, &labels, config).unwrap();
        let predicted = model.predict(&query).unwrap();
        prop_assert!(labels.iter().any(|&l| l == predicted));
    }

    #[test]
    fn one_prototype_per_label(
        (samples, labels) in dataset_strategy(),
    ) {
        let model = LvqModel::new(&samples, &labels).unwrap();
        let mut expected: Vec<&str> = labels.clone();
        expected.sort_unstable();
        expected.dedup();
        let mut actual: Vec<&str> = model.labels().collect();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);
        prop_assert!(model.prototypes().iter().all(|p| p.dimensions() == DIM));
    }

    #[test]
    fn zero_epochs_yields_class_means(
        (samples, labels) in dataset_strategy(),
    ) {
        let config = LvqConfig::default().with_epochs(0);
        let model = LvqModel::with_config(&samples, &labels, config).unwrap();

        for prototype in model.prototypes() {
            let members: Vec<&Vec<f64>> = samples
                .iter()
                .zip(&labels)
                .filter_map(|(s, &l)| (l == prototype.label()).then_some(s))
                .collect();
            for j in 0..DIM {
                let mean = members.iter().map(|s| s[j]).sum::<f64>() / members.len() as f64;
                prop_assert!(
                    (prototype.weights()[j] - mean).abs() < 1e-9,
                    "feature {} of {}: {} != {}",
                    j, prototype.label(), prototype.weights()[j], mean
                );
            }
        }
    }

    #[test]
    fn alpha_decays_geometrically(
        (samples, labels) in dataset_strategy(),
        config in config_strategy(),
    ) {
        let model = LvqModel::with_config(&samples, &labels, config).unwrap();

        let history = model.history();
        prop_assert_eq!(history.len(), config.epochs);
        for (k, stats) in history.iter().enumerate() {
            let expected = config.learning_rate(k);
            prop_assert!((stats.alpha - expected).abs() <= 1e-12 * config.alpha);
            prop_assert_eq!(stats.attracted + stats.repelled, samples.len());
        }
        for pair in history.windows(2) {
            prop_assert!(pair[1].alpha <= pair[0].alpha);
        }

        let expected_final = config.learning_rate(config.epochs);
        prop_assert!((model.final_alpha() - expected_final).abs() <= 1e-12 * config.alpha);
    }

    #[test]
    fn distance_is_non_negative_and_zero_on_identity(
        a in vector_strategy(DIM),
        b in vector_strategy(DIM),
    ) {
        prop_assert!(Distance::squared_euclidean(&a, &b) >= 0.0);
        prop_assert_eq!(Distance::squared_euclidean(&a, &a), 0.0);
        prop_assume!(a != b);
        prop_assert!(Distance::squared_euclidean(&a, &b) > 0.0);
    }

    #[test]
    fn prediction_does_not_mutate_model(
        (samples, labels) in dataset_strategy(),
        query in vector_strategy(DIM),
    ) {
        let model = LvqModel::new(&samples, &labels).unwrap();
        let before = model.table().clone();

        let first = model.predict(&query).unwrap().to_string();
        let second = model.predict(&query).unwrap().to_string();

        prop_assert_eq!(first, second);
        prop_assert_eq!(model.table(), &before);
    }

    #[test]
    fn wrong_dimension_is_rejected(
        (samples, labels) in dataset_strategy(),
        len in (0usize..8).prop_filter("must differ from DIM", |&l| l != DIM),
    ) {
        let model = LvqModel::new(&samples, &labels).unwrap();
        let query = vec![0.0; len];
        let is_mismatch = matches!(
            model.predict(&query),
            Err(LvqError::DimensionMismatch { expected: DIM, got }) if got == len
        );
        prop_assert!(is_mismatch);
    }
}
