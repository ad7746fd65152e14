//! egui dashboard shell: state, controller and renderer.

/// Controller bridging the scoring pipeline to the UI.
pub mod controller;
/// Render-facing state types.
pub mod state;
/// Palette and visuals.
pub mod style;
/// egui renderer.
pub mod ui;
/// Domain-to-table projection helpers.
pub mod view_model;
