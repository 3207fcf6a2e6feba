//! Minimal `multipart/form-data` encoder for a single file field.

use super::StagedFile;

/// Name of the form field the backend reads the upload from.
pub const FILE_FIELD: &str = "file";

/// An encoded form body together with its `Content-Type` header value.
#[derive(Debug)]
pub struct MultipartBody {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Encode `file` as the only part of a form, using a fresh random boundary.
pub fn encode_file(file: &StagedFile) -> MultipartBody {
    let boundary = format!("----passenger-insight-{}", uuid::Uuid::new_v4().simple());
    encode_file_with_boundary(file, &boundary)
}

fn encode_file_with_boundary(file: &StagedFile, boundary: &str) -> MultipartBody {
    let head = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"{FILE_FIELD}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
        escape_quoted(&file.name),
        file.content_type(),
    );
    let tail = format!("\r\n--{boundary}--\r\n");
    let mut bytes = Vec::with_capacity(head.len() + file.bytes.len() + tail.len());
    bytes.extend_from_slice(head.as_bytes());
    bytes.extend_from_slice(&file.bytes);
    bytes.extend_from_slice(tail.as_bytes());
    MultipartBody {
        content_type: format!("multipart/form-data; boundary={boundary}"),
        bytes,
    }
}

/// Percent-encode the characters that would break a quoted header parameter.
fn escape_quoted(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("%22"),
            '\r' => escaped.push_str("%0D"),
            '\n' => escaped.push_str("%0A"),
            other => escaped.push(other),
        }
    }
    escaped
}
