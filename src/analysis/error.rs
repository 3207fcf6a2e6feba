use std::path::PathBuf;

/// Failures surfaced to the user while staging or analyzing a file.
///
/// None of these are fatal; the user can always pick another file or retry.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The candidate is neither a CSV MIME type nor a `.csv` filename.
    #[error("Error: Please upload a valid .csv file.")]
    InvalidFileType {
        /// Name of the rejected candidate, if there was one.
        name: Option<String>,
    },
    /// The candidate passed validation but its bytes could not be read.
    #[error("Error: Could not read {}: {source}", path.display())]
    FileUnreadable {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Submit was requested with nothing staged.
    #[error("Please select a file first.")]
    NoFileSelected,
    /// Transport failure, non-2xx status, or an unusable success body.
    #[error("Analysis Error: {0}")]
    AnalysisRequestFailed(String),
}

impl AnalysisError {
    /// The request failure message without the status prefix.
    pub fn request_message(&self) -> Option<&str> {
        match self {
            Self::AnalysisRequestFailed(message) => Some(message),
            _ => None,
        }
    }
}
