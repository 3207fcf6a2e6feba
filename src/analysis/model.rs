//! Wire types for the `/analyze` response.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Payload returned by the backend on a 2xx response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub summary: Summary,
    pub predictions: Vec<Prediction>,
    /// Chart name to base64-encoded PNG. Iterated in key order.
    #[serde(default)]
    pub charts: BTreeMap<String, String>,
}

impl AnalysisResult {
    /// Parse a success body, rejecting any contract violation.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// Aggregate counts over the whole uploaded file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Summary {
    pub total: u64,
    pub survived: u64,
    pub deceased: u64,
}

/// One passenger row of the prediction table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Prediction {
    #[serde(rename = "PassengerId")]
    pub passenger_id: PassengerId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Predicted_Outcome")]
    pub outcome: PredictedOutcome,
    #[serde(rename = "Survival_Probability")]
    pub survival_probability: f64,
}

/// Passenger identifier; the backend sends `"N/A"` when the CSV has no id column.
///
/// A float-typed id column arrives as `1.0` and is shown as `1`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PassengerId {
    Number(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Float(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Binary survival prediction. Only `0` and `1` are legal on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum PredictedOutcome {
    DidNotSurvive,
    Survived,
}

impl PredictedOutcome {
    /// Table label for the outcome.
    pub fn label(self) -> &'static str {
        match self {
            Self::Survived => "Survived",
            Self::DidNotSurvive => "Did Not Survive",
        }
    }
}

impl TryFrom<u8> for PredictedOutcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::DidNotSurvive),
            1 => Ok(Self::Survived),
            other => Err(format!("Predicted_Outcome must be 0 or 1, got {other}")),
        }
    }
}
