//! Library exports for reuse in the binary, tests and benchmarks.
/// Application directory helpers.
pub mod app_dirs;
/// Bundled model artifact and default dataset.
pub mod bundled;
/// egui dashboard shell.
pub mod dashboard;
/// CSV dataset loading.
pub mod dataset;
/// Logging setup.
pub mod logging;
/// Classifier model artifact.
pub mod model;
/// Customer report formatting.
pub mod report;
/// Dataset scoring.
pub mod scoring;
/// Executive summary projection.
pub mod summary;
