/// Default label of the submit control.
pub const SUBMIT_LABEL: &str = "Start Analysis";
/// Label shown next to the spinner while a request is in flight.
pub const SUBMIT_BUSY_LABEL: &str = "Analyzing...";

/// File picker / drop target region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadState {
    /// Name of the staged file, or a placeholder.
    pub file_label: String,
    /// True while files are dragged over the window.
    pub drag_active: bool,
}

impl Default for UploadState {
    fn default() -> Self {
        Self {
            file_label: "No file selected".into(),
            drag_active: false,
        }
    }
}

/// The "Start Analysis" button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitState {
    pub enabled: bool,
    /// Shows the spinner in place of the default label.
    pub busy: bool,
    pub label: String,
}

impl SubmitState {
    pub(crate) fn begin_busy(&mut self) {
        self.enabled = false;
        self.busy = true;
        self.label = SUBMIT_BUSY_LABEL.into();
    }

    pub(crate) fn restore(&mut self) {
        self.enabled = true;
        self.busy = false;
        self.label = SUBMIT_LABEL.into();
    }
}

impl Default for SubmitState {
    fn default() -> Self {
        Self {
            enabled: false,
            busy: false,
            label: SUBMIT_LABEL.into(),
        }
    }
}
