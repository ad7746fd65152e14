//! End-to-end integration tests: model artifact + CSV from disk ->
//! score -> summarize -> report.

use std::fs;

use subsight::dataset::{Dataset, DatasetError};
use subsight::model::GbdtModel;
use subsight::report;
use subsight::scoring::{DEFAULT_THRESHOLD, ScoreError, ScoringService};
use subsight::summary::{ProbabilityTier, SummarySchema};
use tempfile::TempDir;

const MODEL_JSON: &str = r#"{
  "model_version": 1,
  "feature_columns": [
    "age",
    "job_admin",
    "marital_single",
    "education_tertiary",
    "default_unknown",
    "poutcome_success",
    "quarter_Q2"
  ],
  "learning_rate": 1.0,
  "base_score": 0.0,
  "stumps": [
    { "feature_index": 5, "threshold": 0.5, "left_value": -2.197225, "right_value": 2.944439 }
  ]
}"#;

const CUSTOMERS_CSV: &str = "\
age,job_admin,job_technician,marital_married,marital_single,education_secondary,education_tertiary,default_unknown,poutcome_success,quarter_Q2,quarter_Q3
35,1,0,0,1,0,1,0,1,1,0
61,0,1,1,0,1,0,1,0,0,1
";

#[test]
fn score_summarize_report_round_trip() {
    // 1. Materialize the artifact and dataset on disk.
    let dir = TempDir::new().unwrap();
    let model_path = dir.path().join("subscription_model.json");
    let data_path = dir.path().join("customers.csv");
    fs::write(&model_path, MODEL_JSON).unwrap();
    fs::write(&data_path, CUSTOMERS_CSV).unwrap();

    // 2. Load both the way the app does.
    let model = GbdtModel::load_json(&model_path).unwrap();
    let dataset = Dataset::from_csv_path(&data_path).unwrap();

    // 3. Score at the default threshold.
    let scores = ScoringService::new(model)
        .score(&dataset, DEFAULT_THRESHOLD)
        .unwrap();
    assert_eq!(scores.predictions, vec![1, 0]);
    assert!((scores.probabilities[0] - 0.95).abs() < 1e-4);
    assert!((scores.probabilities[1] - 0.10).abs() < 1e-4);

    // 4. Summarize: the first row is the canonical happy-path customer.
    let schema = SummarySchema::resolve(&dataset);
    let summary = schema.summarize(&dataset, &scores);
    assert_eq!(summary.len(), 2);

    let first = &summary[0];
    assert_eq!(first.age, 35.0);
    assert_eq!(first.job, "admin");
    assert_eq!(first.marital_status, "Single");
    assert_eq!(first.education, "tertiary");
    assert_eq!(first.has_defaulted, "No");
    assert_eq!(first.previously_subscribed, "Yes");
    assert_eq!(first.contact_quarter, "Q2");
    assert_eq!(first.prediction_outcome, "Will Subscribe");
    assert_eq!(first.probability_label, "High (95%)");
    assert_eq!(first.tier, ProbabilityTier::High);

    let second = &summary[1];
    assert_eq!(second.job, "technician");
    assert_eq!(second.marital_status, "Married");
    assert_eq!(second.has_defaulted, "No Information");
    assert_eq!(second.contact_quarter, "Q3");
    assert_eq!(second.prediction_outcome, "Will Not Subscribe");
    assert_eq!(second.probability_label, "Very Low (10%)");

    // 5. Render both reports.
    let report_one = report::render(first);
    assert!(report_one.starts_with("**Tier 1\n"));
    assert!(report_one.contains("Subscription Probability 95.0%"));
    assert!(report_one.contains("| 35 | admin | Single | tertiary |"));
    assert!(report_one.contains("| Yes | No | Will Subscribe |"));

    let report_two = report::render(second);
    assert!(report_two.starts_with("**Tier 3\n"));
    assert!(report_two.contains("Subscription Probability 10.0%"));
}

#[test]
fn schema_mismatch_fails_the_interaction() {
    let dir = TempDir::new().unwrap();
    let model_path = dir.path().join("subscription_model.json");
    let data_path = dir.path().join("customers.csv");
    fs::write(&model_path, MODEL_JSON).unwrap();
    fs::write(&data_path, "age,job_admin\n35,1\n").unwrap();

    let model = GbdtModel::load_json(&model_path).unwrap();
    let dataset = Dataset::from_csv_path(&data_path).unwrap();
    let err = ScoringService::new(model)
        .score(&dataset, DEFAULT_THRESHOLD)
        .unwrap_err();
    assert!(matches!(
        err,
        ScoreError::MissingFeature { ref column } if column == "marital_single"
    ));
}

#[test]
fn malformed_uploads_surface_typed_errors() {
    let dir = TempDir::new().unwrap();

    let ragged = dir.path().join("ragged.csv");
    fs::write(&ragged, "age,job_admin\n35,1\n61\n").unwrap();
    assert!(matches!(
        Dataset::from_csv_path(&ragged),
        Err(DatasetError::RaggedRow { row_index: 1, .. })
    ));

    let textual = dir.path().join("textual.csv");
    fs::write(&textual, "age,job_admin\n35,admin\n").unwrap();
    assert!(matches!(
        Dataset::from_csv_path(&textual),
        Err(DatasetError::BadValue { .. })
    ));

    let empty = dir.path().join("empty.csv");
    fs::write(&empty, "age,job_admin\n").unwrap();
    assert!(matches!(
        Dataset::from_csv_path(&empty),
        Err(DatasetError::Empty)
    ));
}
