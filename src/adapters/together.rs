//! Together text-to-image adapter.
//!
//! Together's image endpoint returns artifacts inline. The outgoing body
//! always declares `response_format: "base64"`, whatever the caller asked
//! for, so the response can be decoded locally without a second fetch.
//! Chat and text-generation for Together go through
//! [`super::OpenAiCompatibleAdapter`] instead.

use async_trait::async_trait;
use serde_json::Value;

use super::{ProviderTaskAdapter, job_submission_body};
use crate::error::InferError;
use crate::response::decode_base64_image;
use crate::transport::{HttpTransport, RawResponse};
use crate::types::{InferenceOutput, InferenceProvider, InferenceTask, RequestPayload};

/// Adapter for Together image generation.
#[derive(Debug, Clone, Default)]
pub struct TogetherTextToImageAdapter;

impl TogetherTextToImageAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProviderTaskAdapter for TogetherTextToImageAdapter {
    fn provider(&self) -> InferenceProvider {
        InferenceProvider::Together
    }

    fn task(&self) -> InferenceTask {
        InferenceTask::TextToImage
    }

    fn make_route(&self, _model: &str) -> String {
        "v1/images/generations".to_string()
    }

    fn prepare_payload(
        &self,
        args: &RequestPayload,
        model: &str,
    ) -> Result<RequestPayload, InferError> {
        let mut body = job_submission_body(args, model);
        // Forced after the merge so a caller-supplied response_format never
        // survives.
        body.insert(
            "response_format".to_string(),
            Value::String("base64".to_string()),
        );
        Ok(body)
    }

    async fn get_response(
        &self,
        raw: RawResponse,
        _transport: &dyn HttpTransport,
    ) -> Result<InferenceOutput, InferError> {
        let value = match raw {
            RawResponse::Json(value) => value,
            RawResponse::Bytes(_) => {
                return Err(InferError::output_validation(
                    "expected a JSON image envelope, got a binary body",
                    None,
                ));
            }
        };
        decode_base64_image(&value).map(InferenceOutput::Binary)
    }
}
