//! fal.ai queue adapter for image generation.
//!
//! fal runs every request through its queue service: submission and polls
//! both answer with a queue status envelope. `IN_QUEUE`/`IN_PROGRESS`
//! surface as a pending handle built from `request_id` and `status_url`;
//! `COMPLETED` points at a `response_url` the adapter fetches once through
//! the injected transport. The route is just the model id under the queue
//! host.

use async_trait::async_trait;
use serde_json::Value;

use super::{ProviderTaskAdapter, job_submission_body};
use crate::error::InferError;
use crate::response::fetch_artifact;
use crate::transport::{HttpTransport, RawResponse};
use crate::types::{
    InferenceOutput, InferenceProvider, InferenceTask, PendingJob, RequestPayload,
};

/// Adapter for fal.ai image generation.
#[derive(Debug, Clone, Default)]
pub struct FalAiTextToImageAdapter;

impl FalAiTextToImageAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProviderTaskAdapter for FalAiTextToImageAdapter {
    fn provider(&self) -> InferenceProvider {
        InferenceProvider::FalAi
    }

    fn task(&self) -> InferenceTask {
        InferenceTask::TextToImage
    }

    fn make_route(&self, model: &str) -> String {
        model.to_string()
    }

    fn prepare_payload(
        &self,
        args: &RequestPayload,
        model: &str,
    ) -> Result<RequestPayload, InferError> {
        Ok(job_submission_body(args, model))
    }

    async fn get_response(
        &self,
        raw: RawResponse,
        transport: &dyn HttpTransport,
    ) -> Result<InferenceOutput, InferError> {
        let value = match raw {
            RawResponse::Json(value) => value,
            RawResponse::Bytes(_) => {
                return Err(InferError::output_validation(
                    "expected a JSON queue envelope, got a binary body",
                    None,
                ));
            }
        };

        match value.get("status").and_then(Value::as_str) {
            Some("IN_QUEUE") | Some("IN_PROGRESS") => {
                let id = value
                    .get("request_id")
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        InferError::output_validation(
                            "queue envelope has no 'request_id'",
                            Some(value.clone()),
                        )
                    })?;
                let status_url = value
                    .get("status_url")
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        InferError::output_validation(
                            "queue envelope has no 'status_url'",
                            Some(value.clone()),
                        )
                    })?;
                Ok(InferenceOutput::Pending(PendingJob::pending(id, status_url)))
            }
            Some("COMPLETED") => {
                let response_url = value
                    .get("response_url")
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        InferError::output_validation(
                            "completed queue envelope has no 'response_url'",
                            Some(value.clone()),
                        )
                    })?;
                fetch_artifact(response_url, transport, &value).await
            }
            _ => Err(InferError::output_validation(
                "queue envelope has no recognized 'status'",
                Some(value),
            )),
        }
    }
}
