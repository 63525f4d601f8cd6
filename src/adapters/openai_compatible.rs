//! Generic adapter for providers exposing an OpenAI-compatible API.
//!
//! Covers the "standard" providers whose wire shape needs nothing beyond the
//! model merge: the body is the caller's arguments with `model` injected,
//! and the response passes through unchanged for a higher layer to decode.

use async_trait::async_trait;

use super::{ProviderTaskAdapter, openai_compatible_body, passthrough_response};
use crate::error::InferError;
use crate::transport::{HttpTransport, RawResponse};
use crate::types::{InferenceOutput, InferenceProvider, InferenceTask, RequestPayload};

/// Adapter for one OpenAI-compatible (provider, task) pair.
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleAdapter {
    provider: InferenceProvider,
    task: InferenceTask,
    route: &'static str,
}

impl OpenAiCompatibleAdapter {
    pub fn new(provider: InferenceProvider, task: InferenceTask, route: &'static str) -> Self {
        Self {
            provider,
            task,
            route,
        }
    }
}

#[async_trait]
impl ProviderTaskAdapter for OpenAiCompatibleAdapter {
    fn provider(&self) -> InferenceProvider {
        self.provider
    }

    fn task(&self) -> InferenceTask {
        self.task
    }

    fn make_route(&self, _model: &str) -> String {
        self.route.to_string()
    }

    fn prepare_payload(
        &self,
        args: &RequestPayload,
        model: &str,
    ) -> Result<RequestPayload, InferError> {
        Ok(openai_compatible_body(args, model))
    }

    async fn get_response(
        &self,
        raw: RawResponse,
        _transport: &dyn HttpTransport,
    ) -> Result<InferenceOutput, InferError> {
        Ok(passthrough_response(raw))
    }
}
