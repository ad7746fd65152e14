//! Shared state types for the dashboard UI.

use eframe::egui::Color32;

use crate::dashboard::style::{self, StatusTone};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Footer badge and message.
    pub status: StatusBarState,
    /// Display name of the loaded dataset.
    pub dataset_label: String,
    /// True while the bundled default dataset is loaded.
    pub using_default_data: bool,
    /// Raw dataset rows ("Test Data Set").
    pub raw: TableState,
    /// Raw rows plus Prediction and Probability columns.
    pub results: TableState,
    /// Executive summary rows.
    pub summary: TableState,
    /// Row index the report is rendered for.
    pub selected_row: usize,
    /// Rendered report for the selected row, if any rows exist.
    pub report: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            dataset_label: String::new(),
            using_default_data: true,
            raw: TableState::default(),
            results: TableState::default(),
            summary: TableState::default(),
            selected_row: 0,
            report: None,
        }
    }
}

/// Render-ready table: header names plus formatted cell strings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableState {
    /// Column headers, in display order.
    pub columns: Vec<String>,
    /// Formatted cells, one inner vec per row.
    pub rows: Vec<Vec<String>>,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Status message.
    pub text: String,
    /// Badge caption.
    pub badge_label: String,
    /// Badge fill color.
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Initial footer state before any dataset is loaded.
    pub fn idle() -> Self {
        let (badge_label, badge_color) = style::status_badge(StatusTone::Idle);
        Self {
            text: "Load a dataset to get started".into(),
            badge_label: badge_label.into(),
            badge_color,
        }
    }
}
