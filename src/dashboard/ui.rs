//! egui renderer for the dashboard.

use eframe::egui::{self, Frame, Margin, RichText, StrokeKind, Ui, Vec2};

use crate::dashboard::controller::DashboardController;
use crate::dashboard::state::TableState;
use crate::dashboard::style;
use crate::scoring::ScoringService;

/// Smallest window the layout still renders comfortably in.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(960.0, 640.0);

const TABLE_MAX_HEIGHT: f32 = 220.0;

const USER_GUIDE: &str = "\
1. Upload a CSV file with the expected feature columns, or stay on the \
bundled default test data.
2. Review the raw rows under Test Data Set.
3. Predictions run automatically against the pre-trained classifier; \
nothing is sent anywhere.
4. The result table repeats the raw columns with Prediction and \
Probability appended.
5. The executive summary decodes the one-hot columns into readable \
customer facts.
6. Pick a row index at the bottom to generate the final report for \
that customer.";

/// Renders the egui UI using the shared controller state.
pub struct DashboardApp {
    controller: DashboardController,
    visuals_set: bool,
}

impl DashboardApp {
    /// Create the app and score the bundled default dataset.
    pub fn new(scorer: ScoringService) -> Result<Self, String> {
        let mut controller = DashboardController::new(scorer);
        controller.load_default_dataset()?;
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Predicting Term Deposit Subscription")
                            .color(palette.text_primary)
                            .strong(),
                    );
                    ui.separator();
                    ui.label(
                        RichText::new(&self.controller.ui.dataset_label)
                            .color(palette.text_muted),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
            });
    }

    fn render_sidebar(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.add_space(6.0);
        ui.label(
            RichText::new("Upload File and User Guide")
                .color(palette.text_primary)
                .strong(),
        );
        ui.add_space(8.0);
        if ui.button("Upload CSV…").clicked() {
            self.controller.open_dataset_via_dialog();
        }
        if !self.controller.ui.using_default_data && ui.button("Use default test data").clicked() {
            self.controller.reset_to_default_dataset();
        }
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(6.0);
        ui.label(RichText::new("User Guide").color(palette.text_primary));
        ui.add_space(4.0);
        ui.label(RichText::new(USER_GUIDE).color(palette.text_muted));
    }

    fn render_tables(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        section_heading(ui, "Test Data Set");
        if self.controller.ui.using_default_data {
            ui.label(RichText::new("You are using default test data.").color(palette.text_muted));
        }
        render_table(ui, "raw_table", &self.controller.ui.raw);

        ui.add_space(12.0);
        section_heading(ui, "Result with Probability and Prediction Columns");
        render_table(ui, "results_table", &self.controller.ui.results);

        ui.add_space(12.0);
        section_heading(
            ui,
            &format!("Executive Summary (Threshold: {})", self.controller.threshold()),
        );
        render_table(ui, "summary_table", &self.controller.ui.summary);
    }

    fn render_report_section(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        section_heading(ui, "Final Report for Selected Customer");
        let max = self.controller.row_count().saturating_sub(1);
        let mut index = self.controller.ui.selected_row;
        ui.horizontal(|ui| {
            ui.label(RichText::new("Row index").color(palette.text_muted));
            let drag = egui::DragValue::new(&mut index).range(0..=max);
            if ui.add(drag).changed() {
                self.controller.select_row(index);
            }
        });
        ui.add_space(6.0);
        if let Some(report) = self.controller.ui.report.clone() {
            Frame::new()
                .fill(palette.bg_primary)
                .stroke(style::section_stroke())
                .inner_margin(Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.monospace(report);
                });
        }
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(badge_rect, 0.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        0.0,
                        style::section_stroke(),
                        StrokeKind::Inside,
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                });
            });
    }
}

fn section_heading(ui: &mut Ui, title: &str) {
    let palette = style::palette();
    ui.label(
        RichText::new(title)
            .color(palette.text_primary)
            .strong()
            .size(16.0),
    );
    ui.add_space(4.0);
}

fn render_table(ui: &mut Ui, salt: &str, table: &TableState) {
    let palette = style::palette();
    Frame::new()
        .fill(palette.bg_primary)
        .stroke(style::section_stroke())
        .inner_margin(Margin::symmetric(6, 4))
        .show(ui, |ui| {
            egui::ScrollArea::both()
                .id_salt(salt.to_string())
                .max_height(TABLE_MAX_HEIGHT)
                .show(ui, |ui| {
                    egui::Grid::new(salt).striped(true).show(ui, |ui| {
                        ui.label(RichText::new("#").color(palette.text_muted));
                        for column in &table.columns {
                            ui.label(RichText::new(column).color(palette.text_muted));
                        }
                        ui.end_row();
                        for (index, row) in table.rows.iter().enumerate() {
                            ui.label(RichText::new(index.to_string()).color(palette.text_muted));
                            for cell in row {
                                ui.label(cell);
                            }
                            ui.end_row();
                        }
                    });
                });
        });
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_top_bar(ctx);
        egui::SidePanel::left("guide")
            .resizable(false)
            .min_width(260.0)
            .max_width(300.0)
            .show(ctx, |ui| self.render_sidebar(ui));
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .show(ui, |ui| {
                    self.render_tables(ui);
                    ui.add_space(12.0);
                    self.render_report_section(ui);
                });
        });
    }
}
