//! Helpers to convert domain data into egui-facing table rows.

use crate::dashboard::state::TableState;
use crate::dataset::Dataset;
use crate::scoring::Scores;
use crate::summary::{SUMMARY_COLUMNS, SummaryRow};

/// Table view of the raw dataset.
pub fn dataset_table(dataset: &Dataset) -> TableState {
    TableState {
        columns: dataset.columns().to_vec(),
        rows: (0..dataset.row_count())
            .map(|row| dataset.row(row).iter().map(|&value| cell(value)).collect())
            .collect(),
    }
}

/// Table view of the raw dataset with Prediction and Probability
/// columns appended, aligned by row.
pub fn results_table(dataset: &Dataset, scores: &Scores) -> TableState {
    let mut columns = dataset.columns().to_vec();
    columns.push("Prediction".to_string());
    columns.push("Probability".to_string());
    let rows = (0..dataset.row_count())
        .map(|row| {
            let mut cells: Vec<String> =
                dataset.row(row).iter().map(|&value| cell(value)).collect();
            cells.push(scores.predictions[row].to_string());
            cells.push(format!("{:.4}", scores.probabilities[row]));
            cells
        })
        .collect();
    TableState { columns, rows }
}

/// Table view of the executive summary.
pub fn summary_table(rows: &[SummaryRow]) -> TableState {
    TableState {
        columns: SUMMARY_COLUMNS.iter().map(|name| name.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| {
                vec![
                    cell(row.age),
                    row.job.clone(),
                    row.marital_status.clone(),
                    row.education.clone(),
                    row.has_defaulted.clone(),
                    row.previously_subscribed.clone(),
                    row.contact_quarter.clone(),
                    row.prediction_outcome.clone(),
                    row.probability_label.clone(),
                ]
            })
            .collect(),
    }
}

/// Format a cell; whole numbers drop the fraction (ages, one-hot flags).
fn cell(value: f32) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_csv_str("age,job_admin\n35,1\n61,0\n").unwrap()
    }

    fn scores() -> Scores {
        Scores {
            predictions: vec![1, 0],
            probabilities: vec![0.9512, 0.1004],
        }
    }

    #[test]
    fn dataset_table_mirrors_header_and_rows() {
        let table = dataset_table(&dataset());
        assert_eq!(table.columns, ["age", "job_admin"]);
        assert_eq!(table.rows, [["35", "1"], ["61", "0"]]);
    }

    #[test]
    fn results_table_appends_prediction_and_probability() {
        let table = results_table(&dataset(), &scores());
        assert_eq!(table.columns[2], "Prediction");
        assert_eq!(table.columns[3], "Probability");
        assert_eq!(table.rows[0][2], "1");
        assert_eq!(table.rows[0][3], "0.9512");
        assert_eq!(table.rows[1][3], "0.1004");
    }

    #[test]
    fn summary_table_uses_the_fixed_column_order() {
        let rows = vec![SummaryRow {
            age: 35.0,
            job: "admin".into(),
            marital_status: "Single".into(),
            education: "tertiary".into(),
            has_defaulted: "No".into(),
            previously_subscribed: "Yes".into(),
            contact_quarter: "Q2".into(),
            prediction_outcome: "Will Subscribe".into(),
            probability_label: "High (95%)".into(),
            probability: 0.95,
            tier: crate::summary::ProbabilityTier::High,
        }];
        let table = summary_table(&rows);
        assert_eq!(table.columns, SUMMARY_COLUMNS);
        assert_eq!(
            table.rows[0],
            [
                "35",
                "admin",
                "Single",
                "tertiary",
                "No",
                "Yes",
                "Q2",
                "Will Subscribe",
                "High (95%)",
            ]
        );
    }
}
