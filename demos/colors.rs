//! Colour Classification - Nearest-Prototype Demo
//!
//! Trains an LVQ1 model on a small set of normalized colour features (four
//! tight clusters and one far-away outlier class), classifies one held-out
//! vector per class and reports accuracy.
//!
//! Run: cargo run --example colors
//! Training logs: RUST_LOG=lvq=debug cargo run --example colors

use lvq::{LvqConfig, LvqModel};

// =============================================================================
// DATA
// =============================================================================

const TRAIN: [[f64; 4]; 9] = [
    [0.1, 0.2, 0.3, 0.4],     // blue
    [0.12, 0.18, 0.33, 0.42], // blue
    [0.9, 0.8, 0.7, 0.6],     // red
    [0.88, 0.82, 0.73, 0.61], // red
    [0.5, 0.5, 0.5, 0.5],     // green
    [0.52, 0.48, 0.49, 0.51], // green
    [0.3, 0.7, 0.6, 0.2],     // yellow
    [0.31, 0.69, 0.61, 0.19], // yellow
    [11.2, 10.3, 13.4, 15.2], // black
];

const TRAIN_LABELS: [&str; 9] = [
    "blue", "blue", "red", "red", "green", "green", "yellow", "yellow", "black",
];

const TEST: [[f64; 4]; 5] = [
    [0.11, 0.21, 0.29, 0.41],  // blue
    [0.89, 0.81, 0.72, 0.62],  // red
    [0.51, 0.49, 0.48, 0.52],  // green
    [0.32, 0.68, 0.62, 0.21],  // yellow
    [11.0, 10.01, 13.1, 15.3], // black
];

const TEST_LABELS: [&str; 5] = ["blue", "red", "green", "yellow", "black"];

fn main() -> lvq::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let model = LvqModel::with_config(&TRAIN, &TRAIN_LABELS, LvqConfig::default())?;
    let eval = model.evaluate(&TEST, &TEST_LABELS)?;

    for (i, outcome) in eval.outcomes().iter().enumerate() {
        println!(
            "Test {} | Predicted: {} | Actual: {}",
            i + 1,
            outcome.predicted(),
            outcome.actual()
        );
    }
    println!("{}", eval);

    Ok(())
}
