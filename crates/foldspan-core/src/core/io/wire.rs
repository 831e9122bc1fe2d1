use crate::core::models::request::EvaluationRequest;
use crate::core::models::response::SpanResponse;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("Failed to parse request document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to write to the output channel: {0}")]
    Io(#[from] std::io::Error),
}

/// Envelope written in place of a response when evaluation fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

/// Reads exactly one request document from `reader`.
///
/// Unknown keys are tolerated and ignored; missing optional fields take
/// their wire defaults.
///
/// # Errors
///
/// Returns [`WireError::Parse`] when the document is not valid JSON or the
/// required fields are absent or mistyped.
pub fn read_request<R: Read>(reader: R) -> Result<EvaluationRequest, WireError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Writes the response as a single flat JSON document followed by a newline.
pub fn write_response<W: Write>(mut writer: W, response: &SpanResponse) -> Result<(), WireError> {
    serde_json::to_writer(&mut writer, response)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Writes the `{"error": ...}` envelope for a failed evaluation.
pub fn write_error<W: Write>(mut writer: W, message: &str) -> Result<(), WireError> {
    let envelope = ErrorEnvelope {
        error: message.to_string(),
    };
    serde_json::to_writer(&mut writer, &envelope)?;
    writer.write_all(b"\n")?;
    Ok(())
}
