//! Bundled model artifact and default dataset.
//!
//! Both files ship inside the binary so a fresh install can score
//! something before the user uploads anything.

use crate::dataset::{Dataset, DatasetError};
use crate::model::{GbdtModel, ModelError};

/// Pre-trained subscription classifier artifact.
const MODEL_JSON: &str = include_str!("../assets/subscription_model.json");

/// Default customer dataset used when nothing has been uploaded.
const DEFAULT_DATASET_CSV: &str = include_str!("../assets/default_customers.csv");

/// Parse and validate the bundled classifier.
pub fn model() -> Result<GbdtModel, ModelError> {
    GbdtModel::from_json_str(MODEL_JSON)
}

/// Parse and validate the bundled default dataset.
pub fn default_dataset() -> Result<Dataset, DatasetError> {
    Dataset::from_csv_str(DEFAULT_DATASET_CSV)
}
