//! Shared response-normalization helpers.
//!
//! Polling envelopes and base64-encoded images show up across several
//! providers; the shape checks live here so adapters stay branch-light.

use base64::Engine;
use bytes::Bytes;
use serde_json::Value;

use crate::error::InferError;
use crate::transport::HttpTransport;
use crate::types::{InferenceOutput, PendingJob};

/// Extract a pending-job handle from a polling envelope, if present.
///
/// A response carrying both `polling_url` and `id` means the job was
/// accepted but not finished; the final artifact comes from re-polling.
pub(crate) fn pending_job(value: &Value) -> Option<PendingJob> {
    let polling_url = value.get("polling_url")?.as_str()?;
    let id = value.get("id")?.as_str()?;
    Some(PendingJob::pending(id, polling_url))
}

/// Best-effort secondary fetch of a terminal-success artifact URL.
///
/// Fetch failure is an output-validation error naming the URL, with the
/// envelope that pointed at it kept for diagnostics.
pub(crate) async fn fetch_artifact(
    url: &str,
    transport: &dyn HttpTransport,
    envelope: &Value,
) -> Result<InferenceOutput, InferError> {
    tracing::debug!(url = %url, "fetching result artifact");
    match transport.get_bytes(url).await {
        Ok(bytes) => Ok(InferenceOutput::Binary(bytes)),
        Err(err) => Err(InferError::output_validation(
            format!("failed to fetch result artifact from '{url}': {err}"),
            Some(envelope.clone()),
        )),
    }
}

/// Decode a `{"data": [{"b64_json": ...}]}` image envelope to raw bytes.
///
/// Every shape mismatch raises an output-validation error carrying the
/// offending raw response.
pub(crate) fn decode_base64_image(value: &Value) -> Result<Bytes, InferError> {
    let data = value
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            InferError::output_validation(
                "expected response with an array-shaped 'data' field",
                Some(value.clone()),
            )
        })?;

    let first = data.first().ok_or_else(|| {
        InferError::output_validation("response 'data' array is empty", Some(value.clone()))
    })?;

    let b64 = first
        .get("b64_json")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            InferError::output_validation(
                "first 'data' element has no string 'b64_json' field",
                Some(value.clone()),
            )
        })?;

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(b64)
        .map_err(|err| {
            InferError::output_validation(
                format!("invalid base64 image payload: {err}"),
                Some(value.clone()),
            )
        })?;

    Ok(Bytes::from(decoded))
}
