//! Upload, analysis request and result rendering for passenger CSV files.

pub mod api;
mod error;
pub mod intake;
pub mod model;
pub mod multipart;
pub mod render;

pub use api::submit_for_analysis;
pub use error::AnalysisError;
pub use intake::{CandidateSource, FileCandidate, StagedFile, stage_file};
pub use model::{AnalysisResult, PassengerId, Prediction, PredictedOutcome, Summary};
pub use render::{CardTone, ChartImage, ChartView, ResultsView, SummaryCard, TableRow, render};
