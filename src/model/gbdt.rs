use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Errors raised while loading or validating a model artifact.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The artifact file could not be read.
    #[error("failed to read model artifact {path}: {source}")]
    Read {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The artifact is not valid JSON for the expected schema.
    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    /// The artifact parsed but violates a structural invariant.
    #[error("invalid model artifact: {0}")]
    Invalid(String),
}

/// Single-node decision tree used as a weak learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stump {
    /// Feature index used for the split.
    pub feature_index: u16,
    /// Threshold in feature units.
    pub threshold: f32,
    /// Contribution for `feature <= threshold`.
    pub left_value: f32,
    /// Contribution for `feature > threshold`.
    pub right_value: f32,
}

impl Stump {
    /// Contribution of this stump for a feature vector.
    pub fn response(&self, features: &[f32]) -> f32 {
        let value = features
            .get(self.feature_index as usize)
            .copied()
            .unwrap_or(0.0);
        if value <= self.threshold {
            self.left_value
        } else {
            self.right_value
        }
    }
}

/// Gradient-boosted decision stump model for binary classification.
///
/// The artifact carries its own ordered feature schema; callers resolve
/// those column names against whatever dataset they are scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GbdtModel {
    /// Model format version.
    pub model_version: i64,
    /// Ordered feature columns the model expects, one per vector slot.
    pub feature_columns: Vec<String>,
    /// Learning rate applied to each stump contribution.
    pub learning_rate: f32,
    /// Raw log-odds before any boosting round.
    pub base_score: f32,
    /// One stump per boosting round.
    pub stumps: Vec<Stump>,
}

impl GbdtModel {
    /// Validate structural invariants of the model.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.feature_columns.is_empty() {
            return Err(ModelError::Invalid(
                "feature_columns must not be empty".to_string(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ModelError::Invalid(format!(
                "learning_rate must be finite and > 0, got {}",
                self.learning_rate
            )));
        }
        if !self.base_score.is_finite() {
            return Err(ModelError::Invalid("base_score must be finite".to_string()));
        }
        let n_features = self.feature_columns.len();
        for (round_idx, stump) in self.stumps.iter().enumerate() {
            if stump.feature_index as usize >= n_features {
                return Err(ModelError::Invalid(format!(
                    "round {round_idx} splits on feature {} but the schema has {n_features} columns",
                    stump.feature_index
                )));
            }
            if !stump.threshold.is_finite()
                || !stump.left_value.is_finite()
                || !stump.right_value.is_finite()
            {
                return Err(ModelError::Invalid(format!(
                    "round {round_idx} contains a non-finite value"
                )));
            }
        }
        Ok(())
    }

    /// Load and validate a model from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self = serde_json::from_slice(&bytes)?;
        model.validate()?;
        info!(
            version = model.model_version,
            features = model.feature_columns.len(),
            rounds = model.stumps.len(),
            "model artifact loaded"
        );
        Ok(model)
    }

    /// Parse and validate a model from an in-memory JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Raw log-odds score for a feature vector.
    pub fn predict_raw(&self, features: &[f32]) -> f32 {
        let mut raw = self.base_score;
        for stump in &self.stumps {
            raw += self.learning_rate * stump.response(features);
        }
        raw
    }

    /// Probability of the positive class for a feature vector.
    pub fn predict_proba(&self, features: &[f32]) -> f32 {
        sigmoid(self.predict_raw(features))
    }
}

/// Logistic squashing of a raw log-odds score into `(0, 1)`.
pub fn sigmoid(raw: f32) -> f32 {
    1.0 / (1.0 + (-raw).exp())
}
