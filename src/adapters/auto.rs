//! The auto-router meta-provider.
//!
//! `auto` defers backend selection to a remote router service: the request
//! is sent to the router base URL in the plain OpenAI-compatible shape and
//! the router forwards it to whichever concrete provider it picks. The one
//! hard precondition is the credential type: only a Hugging Face token can
//! be routed; provider keys belong to direct calls.

use async_trait::async_trait;

use super::{OPENAI_CHAT_ROUTE, ProviderTaskAdapter, openai_compatible_body, passthrough_response};
use crate::error::InferError;
use crate::transport::{HttpTransport, RawResponse};
use crate::types::{InferenceOutput, InferenceProvider, InferenceTask, RequestPayload};

/// Adapter for the `auto` meta-provider.
#[derive(Debug, Clone, Default)]
pub struct AutoRouterAdapter;

impl AutoRouterAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProviderTaskAdapter for AutoRouterAdapter {
    fn provider(&self) -> InferenceProvider {
        InferenceProvider::Auto
    }

    fn task(&self) -> InferenceTask {
        InferenceTask::ChatCompletion
    }

    fn make_route(&self, _model: &str) -> String {
        OPENAI_CHAT_ROUTE.to_string()
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
