//! egui front end: session controller, UI state model and renderer.

/// Event handlers and background request plumbing.
pub mod controller;
/// Plain data the renderer draws from.
pub mod state;
/// Widgets and the `eframe::App` implementation.
pub mod ui;
