//! CSV file intake: validation and staging of a single candidate file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::AnalysisError;

/// Where a candidate's bytes come from.
#[derive(Clone, Debug)]
pub enum CandidateSource {
    /// Read lazily from disk once the candidate passes validation.
    Path(PathBuf),
    /// Already in memory (e.g. supplied with a drop event).
    Bytes(Arc<[u8]>),
}

/// A file offered by the picker or a drop, not yet validated.
#[derive(Clone, Debug)]
pub struct FileCandidate {
    pub name: String,
    /// MIME type when the platform reports one.
    pub mime: Option<String>,
    pub source: CandidateSource,
}

impl FileCandidate {
    /// Candidate backed by a file on disk; the name is the path's file name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            mime: None,
            source: CandidateSource::Path(path),
        }
    }

    /// Candidate whose bytes are already loaded.
    pub fn from_bytes(
        name: impl Into<String>,
        mime: Option<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            mime: mime.filter(|mime| !mime.is_empty()),
            source: CandidateSource::Bytes(bytes.into()),
        }
    }

    /// True when the MIME type mentions CSV or the name ends in `.csv`.
    pub fn looks_like_csv(&self) -> bool {
        is_csv(&self.name, self.mime.as_deref())
    }
}

/// The single file waiting to be submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    pub mime: Option<String>,
    pub bytes: Arc<[u8]>,
}

impl StagedFile {
    /// MIME type sent with the upload.
    pub fn content_type(&self) -> &str {
        self.mime.as_deref().unwrap_or("text/csv")
    }
}

/// Validate a candidate and load its bytes.
///
/// An absent candidate is treated like a non-CSV one.
pub fn stage_file(candidate: Option<FileCandidate>) -> Result<StagedFile, AnalysisError> {
    let Some(candidate) = candidate else {
        return Err(AnalysisError::InvalidFileType { name: None });
    };
    if !candidate.looks_like_csv() {
        return Err(AnalysisError::InvalidFileType {
            name: Some(candidate.name),
        });
    }
    let bytes = match candidate.source {
        CandidateSource::Bytes(bytes) => bytes,
        CandidateSource::Path(path) => read_bytes(&path)?,
    };
    Ok(StagedFile {
        name: candidate.name,
        mime: candidate.mime,
        bytes,
    })
}

fn read_bytes(path: &Path) -> Result<Arc<[u8]>, AnalysisError> {
    std::fs::read(path)
        .map(Arc::from)
        .map_err(|source| AnalysisError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        })
}

fn is_csv(name: &str, mime: Option<&str>) -> bool {
    mime.is_some_and(|mime| mime.contains("csv")) || name.ends_with(".csv")
}
