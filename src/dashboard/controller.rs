//! Bridges the scoring pipeline to the egui UI.

use std::path::{Path, PathBuf};

use rfd::FileDialog;
use tracing::warn;

use crate::bundled;
use crate::dashboard::state::UiState;
use crate::dashboard::style::{self, StatusTone};
use crate::dashboard::view_model;
use crate::dataset::Dataset;
use crate::report;
use crate::scoring::{DEFAULT_THRESHOLD, ScoringService};
use crate::summary::{SummaryRow, SummarySchema};

/// Maintains dashboard state and runs the score → summarize → report
/// pipeline whenever the dataset or selected row changes.
pub struct DashboardController {
    /// Render-ready UI state.
    pub ui: UiState,
    scorer: ScoringService,
    threshold: f32,
    summary: Vec<SummaryRow>,
}

impl DashboardController {
    /// Wrap the shared scoring service.
    pub fn new(scorer: ScoringService) -> Self {
        Self {
            ui: UiState::default(),
            scorer,
            threshold: DEFAULT_THRESHOLD,
            summary: Vec::new(),
        }
    }

    /// Decision threshold used for every scoring pass.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Number of rows in the current summary.
    pub fn row_count(&self) -> usize {
        self.summary.len()
    }

    /// Load the bundled default dataset; used at startup and when the
    /// user discards an upload.
    pub fn load_default_dataset(&mut self) -> Result<(), String> {
        let dataset = bundled::default_dataset()
            .map_err(|err| format!("Failed to load bundled dataset: {err}"))?;
        self.install_dataset(dataset, "Default test data".to_string(), true)
    }

    /// Ask for a CSV file and load it as the active dataset.
    pub fn open_dataset_via_dialog(&mut self) {
        let Some(path) = FileDialog::new().add_filter("CSV", &["csv"]).pick_file() else {
            return;
        };
        self.load_dataset_from_path(path);
    }

    /// Load an uploaded dataset from a known path.
    ///
    /// On any failure the previous dataset and tables stay in place and
    /// the error is surfaced in the status bar.
    pub fn load_dataset_from_path(&mut self, path: PathBuf) {
        let label = dataset_label(&path);
        match Dataset::from_csv_path(&path) {
            Ok(dataset) => {
                if let Err(error) = self.install_dataset(dataset, label, false) {
                    warn!(%error, "failed to score uploaded dataset");
                    self.set_status(error, StatusTone::Error);
                }
            }
            Err(error) => {
                warn!(%error, path = %path.display(), "failed to read uploaded dataset");
                self.set_status(format!("Failed to load {label}: {error}"), StatusTone::Error);
            }
        }
    }

    /// Revert to the bundled dataset, surfacing failures in the status
    /// bar instead of returning them.
    pub fn reset_to_default_dataset(&mut self) {
        if let Err(error) = self.load_default_dataset() {
            self.set_status(error, StatusTone::Error);
        }
    }

    /// Change the report row; indices beyond the summary are clamped.
    pub fn select_row(&mut self, index: usize) {
        self.ui.selected_row = index.min(self.row_count().saturating_sub(1));
        self.refresh_report();
    }

    fn install_dataset(
        &mut self,
        dataset: Dataset,
        label: String,
        is_default: bool,
    ) -> Result<(), String> {
        // Score before touching any UI state so a schema mismatch
        // leaves the previous dataset fully intact.
        let scores = self
            .scorer
            .score(&dataset, self.threshold)
            .map_err(|err| err.to_string())?;
        let schema = SummarySchema::resolve(&dataset);
        let summary = schema.summarize(&dataset, &scores);

        self.ui.raw = view_model::dataset_table(&dataset);
        self.ui.results = view_model::results_table(&dataset, &scores);
        self.ui.summary = view_model::summary_table(&summary);
        self.ui.dataset_label = label;
        self.ui.using_default_data = is_default;
        self.ui.selected_row = self.ui.selected_row.min(summary.len().saturating_sub(1));
        self.summary = summary;
        self.refresh_report();
        self.set_status(
            format!("{} ({} rows scored)", self.ui.dataset_label, self.row_count()),
            StatusTone::Info,
        );
        Ok(())
    }

    fn refresh_report(&mut self) {
        self.ui.report = self.summary.get(self.ui.selected_row).map(report::render);
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (badge_label, badge_color) = style::status_badge(tone);
        self.ui.status.text = text.into();
        self.ui.status.badge_label = badge_label.into();
        self.ui.status.badge_color = badge_color;
    }
}

fn dataset_label(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GbdtModel;
    use std::io::Write;

    fn controller() -> DashboardController {
        // Schema-only model: probability is the base rate for each row.
        let model = GbdtModel {
            model_version: 1,
            feature_columns: vec!["age".into(), "poutcome_success".into()],
            learning_rate: 1.0,
            base_score: 0.5,
            stumps: Vec::new(),
        };
        DashboardController::new(ScoringService::new(model))
    }

    #[test]
    fn default_dataset_populates_tables_and_report() {
        let mut controller = controller();
        controller.load_default_dataset().unwrap();
        assert!(controller.ui.using_default_data);
        assert!(controller.row_count() > 0);
        assert_eq!(controller.ui.raw.rows.len(), controller.row_count());
        assert_eq!(controller.ui.summary.rows.len(), controller.row_count());
        assert!(controller.ui.report.is_some());
        assert_eq!(controller.ui.status.badge_label, "Info");
    }

    #[test]
    fn select_row_clamps_to_the_summary_length() {
        let mut controller = controller();
        controller.load_default_dataset().unwrap();
        let last = controller.row_count() - 1;
        controller.select_row(usize::MAX);
        assert_eq!(controller.ui.selected_row, last);
        controller.select_row(0);
        assert_eq!(controller.ui.selected_row, 0);
    }

    #[test]
    fn failed_upload_keeps_the_previous_dataset() {
        let mut controller = controller();
        controller.load_default_dataset().unwrap();
        let rows_before = controller.ui.raw.rows.clone();

        controller.load_dataset_from_path(PathBuf::from("/nonexistent/upload.csv"));
        assert_eq!(controller.ui.status.badge_label, "Error");
        assert_eq!(controller.ui.raw.rows, rows_before);
        assert!(controller.ui.using_default_data);
    }

    #[test]
    fn schema_mismatch_keeps_the_previous_dataset() {
        let mut controller = controller();
        controller.load_default_dataset().unwrap();
        let rows_before = controller.ui.raw.rows.clone();

        let mut file = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "age,balance\n35,120").unwrap();
        file.flush().unwrap();
        controller.load_dataset_from_path(file.path().to_path_buf());

        assert_eq!(controller.ui.status.badge_label, "Error");
        assert!(controller.ui.status.text.contains("poutcome_success"));
        assert_eq!(controller.ui.raw.rows, rows_before);
    }

    #[test]
    fn shrinking_dataset_clamps_the_selected_row() {
        let mut controller = controller();
        controller.load_default_dataset().unwrap();
        controller.select_row(controller.row_count() - 1);

        let mut file = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "age,poutcome_success\n35,1\n61,0").unwrap();
        file.flush().unwrap();
        controller.load_dataset_from_path(file.path().to_path_buf());

        assert_eq!(controller.row_count(), 2);
        assert_eq!(controller.ui.selected_row, 1);
        assert!(!controller.ui.using_default_data);
        assert!(controller.ui.report.is_some());
    }
}
