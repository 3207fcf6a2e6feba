//! Background work for the controller, delivered back over a channel.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::analysis::{self, AnalysisError, ResultsView, StagedFile};

pub(super) enum JobMessage {
    AnalysisFinished(AnalysisJobResult),
}

#[derive(Debug)]
pub(super) struct AnalysisJob {
    pub(super) endpoint: String,
    pub(super) file: StagedFile,
}

#[derive(Debug)]
pub(super) struct AnalysisJobResult {
    pub(super) file_name: String,
    pub(super) result: Result<ResultsView, AnalysisError>,
}

pub(super) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    analysis_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = mpsc::channel();
        Self {
            message_tx,
            message_rx,
            analysis_in_progress: false,
        }
    }

    pub(super) fn analysis_in_progress(&self) -> bool {
        self.analysis_in_progress
    }

    /// Run the request and the chart decoding off the UI thread.
    ///
    /// Ignored while another analysis is outstanding.
    pub(super) fn begin_analysis(&mut self, job: AnalysisJob) {
        if self.analysis_in_progress {
            return;
        }
        self.analysis_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = analysis::submit_for_analysis(&job.endpoint, &job.file)
                .map(|result| analysis::render(&result));
            let _ = tx.send(JobMessage::AnalysisFinished(AnalysisJobResult {
                file_name: job.file.name,
                result,
            }));
        });
    }

    pub(super) fn clear_analysis(&mut self) {
        self.analysis_in_progress = false;
    }

    pub(super) fn try_recv_message(&self) -> Option<JobMessage> {
        self.message_rx.try_recv().ok()
    }
}
