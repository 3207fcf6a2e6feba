//! Session controller bridging the analysis client to the egui UI.
//!
//! Owns the staged file, the single in-flight request and the [`UiState`]
//! the renderer draws from. Every UI event is dispatched to one of the
//! `pub fn` handlers here.

mod intake;
mod jobs;
mod submission;
mod theme;


use crate::analysis::{AnalysisError, StagedFile};
use crate::config::{AppConfig, ThemePreference};
use crate::egui_app::state::*;

/// Maintains session state and bridges core logic to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    config: AppConfig,
    staged: Option<StagedFile>,
    jobs: jobs::ControllerJobs,
}

impl EguiController {
    /// Build a controller from loaded settings.
    ///
    /// `system_theme` is the OS preference, used when the config has none.
    pub fn new(config: AppConfig, system_theme: Option<ThemePreference>) -> Self {
        let theme = config
            .theme
            .or(system_theme)
            .unwrap_or(ThemePreference::Light);
        Self {
            ui: UiState::new(theme),
            config,
            staged: None,
            jobs: jobs::ControllerJobs::new(),
        }
    }

    /// Settings the controller was built with, including theme changes.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The file that the next submit would upload.
    pub fn staged_file(&self) -> Option<&StagedFile> {
        self.staged.as_ref()
    }

    /// True while an analysis request is outstanding.
    pub fn is_analyzing(&self) -> bool {
        self.jobs.analysis_in_progress()
    }

    /// Drain finished background work. Call once per frame.
    pub fn poll_jobs(&mut self) {
        while let Some(message) = self.jobs.try_recv_message() {
            match message {
                jobs::JobMessage::AnalysisFinished(result) => self.finish_analysis(result),
            }
        }
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState {
            text: text.into(),
            tone,
        };
    }

    /// Change mode unless a request is in flight; completion decides the mode then.
    fn set_mode(&mut self, mode: UiMode) {
        if self.is_analyzing() && mode != UiMode::Analyzing {
            return;
        }
        self.ui.mode = mode;
    }

    fn report_error(&mut self, error: &AnalysisError) {
        self.set_status(error.to_string(), StatusTone::Error);
        self.set_mode(UiMode::Error);
    }
}
