use super::jobs::{AnalysisJob, AnalysisJobResult};
use super::*;

impl EguiController {
    /// Upload the staged file to the backend.
    ///
    /// Without a staged file this only reports [`AnalysisError::NoFileSelected`].
    /// A click while a request is outstanding is ignored.
    pub fn submit_for_analysis(&mut self) {
        if self.is_analyzing() {
            return;
        }
        let Some(file) = self.staged.clone() else {
            self.report_error(&AnalysisError::NoFileSelected);
            return;
        };
        self.ui.submit.begin_busy();
        self.set_mode(UiMode::Analyzing);
        self.set_status(format!("Analyzing {}...", file.name), StatusTone::Loading);
        self.jobs.begin_analysis(AnalysisJob {
            endpoint: self.config.analyze_url(),
            file,
        });
    }

    pub(super) fn finish_analysis(&mut self, message: AnalysisJobResult) {
        self.jobs.clear_analysis();
        self.ui.submit.restore();
        match message.result {
            Ok(view) => {
                let rows = view.rows.len();
                tracing::info!("Analysis of {} returned {rows} predictions", message.file_name);
                self.ui.results.show(view);
                self.set_status(
                    format!("Analysis complete: {rows} predictions for {}.", message.file_name),
                    StatusTone::Success,
                );
                self.set_mode(UiMode::Success);
            }
            Err(err) => {
                tracing::error!("Analysis failed: {err}");
                self.report_error(&err);
            }
        }
    }
}
