/// Color family for the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Loading,
    Success,
    Warning,
    Error,
}

/// Status message shown under the upload controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBarState {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusBarState {
    /// Status shown before any file is chosen.
    pub fn idle() -> Self {
        Self {
            text: "Drop a passenger CSV or browse for one to get started".into(),
            tone: StatusTone::Idle,
        }
    }
}
