#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based Subsight dashboard.

use eframe::egui;
use subsight::bundled;
use subsight::dashboard::ui::{DashboardApp, MIN_VIEWPORT_SIZE};
use subsight::logging;
use subsight::scoring::ScoringService;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let model = bundled::model()?;
    let scorer = ScoringService::new(model);

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_maximized(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Predicting Term Deposit Subscription",
        native_options,
        Box::new(move |_cc| match DashboardApp::new(scorer) {
            Ok(app) => Ok(Box::new(app)),
            Err(err) => Ok(Box::new(LaunchError { message: err })),
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
