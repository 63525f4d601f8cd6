//! Black Forest Labs image generation adapter.
//!
//! BFL runs image generation as a job: submission answers with a polling
//! envelope (`id` + `polling_url`), and a poll that reached the terminal
//! `Ready` state embeds the sample URL instead of the artifact itself. The
//! adapter surfaces the first case as a pending handle and materializes the
//! second with one best-effort secondary fetch through the injected
//! transport.

use async_trait::async_trait;
use serde_json::Value;

use super::{ProviderTaskAdapter, job_submission_body};
use crate::error::InferError;
use crate::response::{fetch_artifact, pending_job};
use crate::transport::{HttpTransport, RawResponse};
use crate::types::{InferenceOutput, InferenceProvider, InferenceTask, RequestPayload};

/// Adapter for Black Forest Labs image generation.
#[derive(Debug, Clone, Default)]
pub struct BlackForestLabsTextToImageAdapter;

impl BlackForestLabsTextToImageAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProviderTaskAdapter for BlackForestLabsTextToImageAdapter {
    fn provider(&self) -> InferenceProvider {
        InferenceProvider::BlackForestLabs
    }

    fn task(&self) -> InferenceTask {
        InferenceTask::TextToImage
    }

    fn make_route(&self, model: &str) -> String {
        format!("v1/{model}")
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
                    "expected a JSON job envelope, got a binary body",
                    None,
                ));
            }
        };

        if let Some(job) = pending_job(&value) {
            return Ok(InferenceOutput::Pending(job));
        }

        let status = value.get("status").and_then(Value::as_str);
        if status == Some("Ready") {
            let sample = value
                .get("result")
                .and_then(|result| result.get("sample"))
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    InferError::output_validation(
                        "terminal 'Ready' response has no 'result.sample' URL",
                        Some(value.clone()),
                    )
                })?;
            return fetch_artifact(sample, transport, &value).await;
        }

        Err(InferError::output_validation(
            "response is neither a polling envelope nor a terminal result",
            Some(value),
        ))
    }
}
