//! UI state model consumed by the egui renderer.
//!
//! The controller is the only writer; the renderer reads it each frame.

mod results;
mod status;
mod upload;

pub use results::ResultsState;
pub use status::{StatusBarState, StatusTone};
pub use upload::{SUBMIT_BUSY_LABEL, SUBMIT_LABEL, SubmitState, UploadState};

use crate::config::ThemePreference;

/// Where the upload/analyze flow currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiMode {
    Idle,
    FileStaged,
    Analyzing,
    Success,
    Error,
}

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub mode: UiMode,
    pub status: StatusBarState,
    pub upload: UploadState,
    pub submit: SubmitState,
    pub results: ResultsState,
    /// Theme currently applied to the window.
    pub theme: ThemePreference,
}

impl UiState {
    pub fn new(theme: ThemePreference) -> Self {
        Self {
            mode: UiMode::Idle,
            status: StatusBarState::idle(),
            upload: UploadState::default(),
            submit: SubmitState::default(),
            results: ResultsState::default(),
            theme,
        }
    }
}
