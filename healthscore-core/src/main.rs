//! predict-health - Command-line health score prediction.
//!
//! Runs the same validate → scale → expand → predict → clip pipeline as
//! the HTTP server, printing the intermediate arrays and the threshold
//! category for quick inspection of the bundled artifacts.
//!
//! ```bash
//! predict-health --data "23.5 4 7 1"
//! predict-health --data "19.8, 95.7, 4.3, 0"
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use healthscore_core::constants::DEFAULT_ARTIFACT_DIR;
use healthscore_core::features::FEATURE_LAYOUT;
use healthscore_core::{predict_health_score, ArtifactStore, FeatureVector, ScoreCategory};

/// Predict a health score with the bundled polynomial regression model.
#[derive(Parser, Debug)]
#[command(name = "predict-health")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Four numeric values in order: BMI, Exercise_Frequency, Sleep_Hours,
    /// Smoking_Status (whitespace or comma separated)
    #[arg(long)]
    data: String,

    /// Directory holding the fitted scaler/expander/model files
    #[arg(long, default_value = DEFAULT_ARTIFACT_DIR)]
    artifact_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Validate before touching the artifacts; bad input should not even
    // trigger a load.
    let input = FeatureVector::from_tokens(&cli.data)?;

    println!("Input features:");
    for (name, value) in FEATURE_LAYOUT.iter().zip(input.as_array()) {
        println!("  {:<20} {}", name, value);
    }

    let store = ArtifactStore::load(&cli.artifact_dir).with_context(|| {
        format!(
            "failed to load model artifacts from '{}'",
            cli.artifact_dir.display()
        )
    })?;

    let prediction = predict_health_score(&store, &input)?;

    println!();
    println!("Scaled input:     {}", prediction.scaled);
    println!("Polynomial terms: {}", prediction.expanded);

    let category = ScoreCategory::from_score(prediction.health_score);

    println!();
    println!("Health score: {:.2}", prediction.rounded_score());
    println!("Category:     {}", category);

    Ok(())
}
