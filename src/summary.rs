//! Executive-summary projection: one-hot decoding and probability
//! tiers.
//!
//! The raw dataset one-hot-encodes its categoricals (`job_admin`,
//! `education_tertiary`, ...). The summary folds each group back into a
//! single human-readable column and replaces the numeric probability
//! with a qualitative tier label, keeping the raw probability alongside
//! for downstream consumers.

use crate::dataset::Dataset;
use crate::scoring::Scores;

/// Summary column headers, in display order.
pub const SUMMARY_COLUMNS: [&str; 9] = [
    "Age",
    "Job",
    "Marital Status",
    "Education",
    "Has Defaulted?",
    "Previously Subscribed?",
    "Contact Quarter",
    "Prediction Outcome",
    "Probability",
];

/// Qualitative probability bucket with breakpoints at 0.29, 0.5, 0.8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbabilityTier {
    /// `p >= 0.8`.
    High,
    /// `0.5 <= p < 0.8`.
    Medium,
    /// `0.29 <= p < 0.5`; the lower breakpoint matches the decision
    /// threshold, so every predicted subscriber is at least Low.
    Low,
    /// `p < 0.29`.
    VeryLow,
}

impl ProbabilityTier {
    /// Bucket a probability. Total and monotonic in `p`.
    pub fn from_probability(p: f32) -> Self {
        if p >= 0.8 {
            Self::High
        } else if p >= 0.5 {
            Self::Medium
        } else if p >= 0.29 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    /// Human-readable bucket name.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }

    /// Display string for a probability, e.g. `"High (95%)"`.
    pub fn display(p: f32) -> String {
        let percent = (p * 100.0).round() as i64;
        format!("{} ({percent}%)", Self::from_probability(p).label())
    }
}

/// One-hot group membership and scalar columns, resolved once from a
/// dataset header instead of rescanning column names per row.
#[derive(Debug, Clone)]
pub struct SummarySchema {
    age: Option<usize>,
    /// `(label, column)` pairs for `job_*`, in header order.
    job: Vec<(String, usize)>,
    /// `(label, column)` pairs for `education_*`, in header order.
    education: Vec<(String, usize)>,
    marital_married: Option<usize>,
    marital_single: Option<usize>,
    default_unknown: Option<usize>,
    poutcome_success: Option<usize>,
    quarter_q2: Option<usize>,
    quarter_q3: Option<usize>,
}

impl SummarySchema {
    /// Resolve group membership from the dataset header.
    pub fn resolve(dataset: &Dataset) -> Self {
        Self {
            age: dataset.column_index("age"),
            job: prefix_group(dataset, "job_"),
            education: prefix_group(dataset, "education_"),
            marital_married: dataset.column_index("marital_married"),
            marital_single: dataset.column_index("marital_single"),
            default_unknown: dataset.column_index("default_unknown"),
            poutcome_success: dataset.column_index("poutcome_success"),
            quarter_q2: dataset.column_index("quarter_Q2"),
            quarter_q3: dataset.column_index("quarter_Q3"),
        }
    }

    /// Project every scored row into a summary row.
    ///
    /// Reads the dataset and scores without touching either; the
    /// summary is an independent copy.
    pub fn summarize(&self, dataset: &Dataset, scores: &Scores) -> Vec<SummaryRow> {
        (0..dataset.row_count())
            .map(|row| self.summarize_row(dataset, row, scores.predictions[row], scores.probabilities[row]))
            .collect()
    }

    fn summarize_row(
        &self,
        dataset: &Dataset,
        row: usize,
        prediction: u8,
        probability: f32,
    ) -> SummaryRow {
        let marital_status = if self.is_hot(dataset, row, self.marital_married) {
            "Married"
        } else if self.is_hot(dataset, row, self.marital_single) {
            "Single"
        } else {
            "Other"
        };
        let has_defaulted = if self.is_hot(dataset, row, self.default_unknown) {
            "No Information"
        } else {
            "No"
        };
        let previously_subscribed = if self.is_hot(dataset, row, self.poutcome_success) {
            "Yes"
        } else {
            "No"
        };
        let contact_quarter = if self.is_hot(dataset, row, self.quarter_q2) {
            "Q2"
        } else if self.is_hot(dataset, row, self.quarter_q3) {
            "Q3"
        } else {
            "Other"
        };
        let prediction_outcome = if prediction == 1 {
            "Will Subscribe"
        } else {
            "Will Not Subscribe"
        };

        SummaryRow {
            age: self.age.map_or(0.0, |column| dataset.value(row, column)),
            job: decode_group(&self.job, dataset, row).unwrap_or("Unknown").to_string(),
            marital_status: marital_status.to_string(),
            education: decode_group(&self.education, dataset, row)
                .unwrap_or("Unknown")
                .to_string(),
            has_defaulted: has_defaulted.to_string(),
            previously_subscribed: previously_subscribed.to_string(),
            contact_quarter: contact_quarter.to_string(),
            prediction_outcome: prediction_outcome.to_string(),
            probability_label: ProbabilityTier::display(probability),
            probability,
            tier: ProbabilityTier::from_probability(probability),
        }
    }

    fn is_hot(&self, dataset: &Dataset, row: usize, column: Option<usize>) -> bool {
        column.is_some_and(|column| dataset.value(row, column) == 1.0)
    }
}

/// One row of the executive summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Customer age, copied straight from the `age` column.
    pub age: f32,
    /// Decoded `job_*` label, `"Unknown"` when no member is hot.
    pub job: String,
    /// `"Married"`, `"Single"` or `"Other"`.
    pub marital_status: String,
    /// Decoded `education_*` label, `"Unknown"` when no member is hot.
    pub education: String,
    /// `"No Information"` or `"No"`; the source schema carries no
    /// positive default indicator.
    pub has_defaulted: String,
    /// `"Yes"` iff the previous campaign succeeded for this customer.
    pub previously_subscribed: String,
    /// `"Q2"`, `"Q3"` or `"Other"`.
    pub contact_quarter: String,
    /// `"Will Subscribe"` or `"Will Not Subscribe"`.
    pub prediction_outcome: String,
    /// Display string, e.g. `"High (95%)"`.
    pub probability_label: String,
    /// Raw positive-class probability backing the label.
    pub probability: f32,
    /// Tier bucket backing the label.
    pub tier: ProbabilityTier,
}

fn prefix_group(dataset: &Dataset, prefix: &str) -> Vec<(String, usize)> {
    dataset
        .columns()
        .iter()
        .enumerate()
        .filter_map(|(index, column)| {
            column
                .strip_prefix(prefix)
                .map(|label| (label.to_string(), index))
        })
        .collect()
}

/// First member equal to 1 wins when a row is unexpectedly multi-hot.
fn decode_group<'a>(
    members: &'a [(String, usize)],
    dataset: &Dataset,
    row: usize,
) -> Option<&'a str> {
    members
        .iter()
        .find(|(_, column)| dataset.value(row, *column) == 1.0)
        .map(|(label, _)| label.as_str())
}
