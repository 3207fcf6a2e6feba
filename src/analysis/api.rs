//! HTTP client for the prediction backend's `/analyze` endpoint.

use serde::Deserialize;

use crate::http_client;

use super::{AnalysisError, AnalysisResult, StagedFile, multipart};

/// Upper bound for a success body; charts are inlined as base64 PNGs.
const MAX_RESULT_RESPONSE_BYTES: usize = 64 * 1024 * 1024;
const MAX_ERROR_RESPONSE_BYTES: usize = 256 * 1024;

/// POST `file` to `endpoint` as multipart form data and parse the result.
///
/// Makes exactly one attempt: no retries and no client-side timeout.
pub fn submit_for_analysis(
    endpoint: &str,
    file: &StagedFile,
) -> Result<AnalysisResult, AnalysisError> {
    let body = multipart::encode_file(file);
    tracing::info!(
        "Submitting {} ({} bytes) to {endpoint}",
        file.name,
        file.bytes.len()
    );
    let request = http_client::agent()
        .post(endpoint)
        .set("Accept", "application/json")
        .set("Content-Type", &body.content_type);

    let response = match request.send_bytes(&body.bytes) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            return Err(failed(status_error_message(code, response)));
        }
        Err(ureq::Error::Transport(err)) => return Err(failed(err.to_string())),
    };

    let bytes = http_client::read_response_bytes(response, MAX_RESULT_RESPONSE_BYTES)
        .map_err(|err| failed(err.to_string()))?;
    AnalysisResult::from_json(&bytes).map_err(|err| failed(err.to_string()))
}

fn failed(message: String) -> AnalysisError {
    AnalysisError::AnalysisRequestFailed(message)
}

/// The backend's `error` message, or a generic message naming the status.
fn status_error_message(code: u16, response: ureq::Response) -> String {
    http_client::read_response_bytes(response, MAX_ERROR_RESPONSE_BYTES)
        .ok()
        .and_then(|body| parse_error_field(&body))
        .unwrap_or_else(|| format!("HTTP error! Status: {code}"))
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

fn parse_error_field(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()?
        .error
        .filter(|message| !message.is_empty())
}
