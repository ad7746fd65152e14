//! Applies the classifier to a loaded dataset.

use thiserror::Error;
use tracing::{info, instrument};

use crate::dataset::Dataset;
use crate::model::GbdtModel;

/// Decision threshold applied to the positive-class probability.
///
/// Deliberately below the naive 0.5: missing a likely subscriber costs
/// more than a wasted call, so the campaign favors recall.
pub const DEFAULT_THRESHOLD: f32 = 0.29;

/// Errors raised while scoring a dataset.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The dataset lacks a feature column the model requires.
    #[error("dataset is missing feature column \"{column}\" required by the model")]
    MissingFeature {
        /// Name of the first absent column.
        column: String,
    },
}

/// Row-aligned scoring output: one prediction and one probability per
/// dataset row, in dataset order.
#[derive(Debug, Clone)]
pub struct Scores {
    /// Binary labels after thresholding (0 or 1).
    pub predictions: Vec<u8>,
    /// Positive-class probabilities in `[0, 1]`.
    pub probabilities: Vec<f32>,
}

/// Holds the one model instance shared read-only across scoring calls.
#[derive(Debug, Clone)]
pub struct ScoringService {
    model: GbdtModel,
}

impl ScoringService {
    /// Wrap a validated model.
    pub fn new(model: GbdtModel) -> Self {
        Self { model }
    }

    /// Borrow the underlying model.
    pub fn model(&self) -> &GbdtModel {
        &self.model
    }

    /// Score every row of the dataset.
    ///
    /// The label is 1 iff the probability is `>= threshold` (inclusive,
    /// so a row sitting exactly on the threshold counts as positive).
    #[instrument(skip(self, dataset), fields(rows = dataset.row_count()))]
    pub fn score(&self, dataset: &Dataset, threshold: f32) -> Result<Scores, ScoreError> {
        // Resolve the model schema against the header once, not per row.
        let mut slots = Vec::with_capacity(self.model.feature_columns.len());
        for column in &self.model.feature_columns {
            let index = dataset
                .column_index(column)
                .ok_or_else(|| ScoreError::MissingFeature {
                    column: column.clone(),
                })?;
            slots.push(index);
        }

        let rows = dataset.row_count();
        let mut predictions = Vec::with_capacity(rows);
        let mut probabilities = Vec::with_capacity(rows);
        let mut features = vec![0.0f32; slots.len()];
        for row in 0..rows {
            for (slot, &column) in slots.iter().enumerate() {
                features[slot] = dataset.value(row, column);
            }
            let probability = self.model.predict_proba(&features);
            probabilities.push(probability);
            predictions.push(u8::from(probability >= threshold));
        }

        info!(
            rows,
            positives = predictions.iter().filter(|&&label| label == 1).count(),
            threshold,
            "dataset scored"
        );
        Ok(Scores {
            predictions,
            probabilities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stump;

    fn service(base_score: f32) -> ScoringService {
        ScoringService::new(GbdtModel {
            model_version: 1,
            feature_columns: vec!["age".into(), "poutcome_success".into()],
            learning_rate: 1.0,
            base_score,
            stumps: Vec::new(),
        })
    }

    fn dataset() -> Dataset {
        Dataset::from_csv_str("age,poutcome_success,extra\n35,1,9\n61,0,9\n").unwrap()
    }

    #[test]
    fn outputs_align_with_dataset_rows() {
        let scores = service(0.0).score(&dataset(), DEFAULT_THRESHOLD).unwrap();
        assert_eq!(scores.predictions.len(), 2);
        assert_eq!(scores.probabilities.len(), 2);
    }

    #[test]
    fn threshold_comparison_is_inclusive() {
        // base_score 0 gives exactly p = 0.5 for every row.
        let scores = service(0.0).score(&dataset(), 0.5).unwrap();
        assert_eq!(scores.predictions, vec![1, 1]);

        let scores = service(0.0).score(&dataset(), 0.500001).unwrap();
        assert_eq!(scores.predictions, vec![0, 0]);
    }

    #[test]
    fn low_base_rate_stays_below_default_threshold() {
        // logit(0.1) ~ -2.197; every probability lands near 0.1.
        let scores = service(-2.197).score(&dataset(), DEFAULT_THRESHOLD).unwrap();
        assert_eq!(scores.predictions, vec![0, 0]);
        for p in scores.probabilities {
            assert!((p - 0.1).abs() < 0.01);
        }
    }

    #[test]
    fn missing_feature_column_names_the_column() {
        let data = Dataset::from_csv_str("age\n35\n").unwrap();
        let err = service(0.0).score(&data, DEFAULT_THRESHOLD).unwrap_err();
        match err {
            ScoreError::MissingFeature { column } => {
                assert_eq!(column, "poutcome_success");
            }
        }
    }

    #[test]
    fn stumps_shift_individual_rows() {
        let mut model = service(0.0).model.clone();
        model.stumps = vec![Stump {
            feature_index: 1,
            threshold: 0.5,
            left_value: -2.0,
            right_value: 2.0,
        }];
        let scores = ScoringService::new(model)
            .score(&dataset(), DEFAULT_THRESHOLD)
            .unwrap();
        assert_eq!(scores.predictions, vec![1, 0]);
        assert!(scores.probabilities[0] > 0.8);
        assert!(scores.probabilities[1] < 0.2);
    }
}
