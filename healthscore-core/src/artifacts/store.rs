//! Artifact store - loads and validates the fitted pipeline objects.
//!
//! Loaded once at process start and treated as read-only for the lifetime
//! of the process. Any load failure is fatal: the service has no
//! correctness without its artifacts, so there is nothing to retry.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::poly::PolynomialExpander;
use super::regression::PolyRegression;
use super::scaler::StandardScaler;
use crate::constants::{MODEL_FILE, POLY_FILE, SCALER_FILE};
use crate::features::layout::LayoutMismatchError;

#[derive(Debug)]
pub enum ArtifactError {
    Io(std::io::Error),
    Deserialize(serde_json::Error),
    LayoutMismatch(LayoutMismatchError),
    Shape(String),
}

impl std::fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactError::Io(e) => write!(f, "IO error: {}", e),
            ArtifactError::Deserialize(e) => write!(f, "Deserialization error: {}", e),
            ArtifactError::LayoutMismatch(e) => write!(f, "{}", e),
            ArtifactError::Shape(msg) => write!(f, "Artifact shape error: {}", msg),
        }
    }
}

impl std::error::Error for ArtifactError {}

impl From<std::io::Error> for ArtifactError {
    fn from(err: std::io::Error) -> Self {
        ArtifactError::Io(err)
    }
}

impl From<serde_json::Error> for ArtifactError {
    fn from(err: serde_json::Error) -> Self {
        ArtifactError::Deserialize(err)
    }
}

impl From<LayoutMismatchError> for ArtifactError {
    fn from(err: LayoutMismatchError) -> Self {
        ArtifactError::LayoutMismatch(err)
    }
}

/// Load diagnostics, kept alongside the artifacts.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactMetadata {
    pub artifact_dir: PathBuf,
    pub loaded_at: DateTime<Utc>,
}

/// The three fitted objects the pipeline runs on.
///
/// Constructed once and passed by reference into the pipeline, so tests
/// can substitute synthetic artifacts without touching the filesystem.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    pub scaler: StandardScaler,
    pub poly: PolynomialExpander,
    pub model: PolyRegression,
    pub metadata: ArtifactMetadata,
}

impl ArtifactStore {
    /// Load all three artifacts from `dir` and cross-validate their shapes.
    pub fn load(dir: &Path) -> Result<Self, ArtifactError> {
        let scaler: StandardScaler = read_json(&dir.join(SCALER_FILE))?;
        let poly: PolynomialExpander = read_json(&dir.join(POLY_FILE))?;
        let model: PolyRegression = read_json(&dir.join(MODEL_FILE))?;

        let store = Self::from_parts(scaler, poly, model, dir.to_path_buf())?;
        log::info!(
            "Fitted artifacts loaded from {} ({} features -> {} terms)",
            dir.display(),
            store.scaler.mean.len(),
            store.poly.output_arity()
        );

        Ok(store)
    }

    /// Assemble a store from already-deserialized parts.
    pub fn from_parts(
        scaler: StandardScaler,
        poly: PolynomialExpander,
        model: PolyRegression,
        artifact_dir: PathBuf,
    ) -> Result<Self, ArtifactError> {
        scaler.validate()?;
        poly.validate()?;
        model.validate()?;

        // The expander's output is the model's input; mismatches here would
        // otherwise only surface per-request.
        if model.coefficients.len() != poly.output_arity() {
            return Err(ArtifactError::Shape(format!(
                "model carries {} coefficients but expander produces {} terms",
                model.coefficients.len(),
                poly.output_arity()
            )));
        }

        Ok(Self {
            scaler,
            poly,
            model,
            metadata: ArtifactMetadata {
                artifact_dir,
                loaded_at: Utc::now(),
            },
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("artifact not found: {}", path.display()),
        )));
    }

    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}
