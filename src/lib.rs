//! Library exports for the Passenger Insight client and its tests.
/// Upload validation, the analysis request and result rendering.
pub mod analysis;
/// Application directory resolution.
pub mod app_dirs;
/// Persisted user settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
pub(crate) mod http_client;
/// Tracing setup with rotating log files.
pub mod logging;
