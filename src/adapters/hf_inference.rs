//! Hugging Face serverless inference adapter.
//!
//! Routes are model-interpolated: the model id is spliced into the path
//! verbatim, special characters included. Chat completion rides the
//! OpenAI-compatible sub-route under the model; the classic tasks
//! (text-generation, feature-extraction) POST straight to the model route
//! with the caller's arguments untouched, since the model lives in the URL.

use async_trait::async_trait;

use super::{ProviderTaskAdapter, openai_compatible_body, passthrough_response};
use crate::error::InferError;
use crate::transport::{HttpTransport, RawResponse};
use crate::types::{InferenceOutput, InferenceProvider, InferenceTask, RequestPayload};

/// Adapter for one hf-inference task.
#[derive(Debug, Clone)]
pub struct HfInferenceAdapter {
    task: InferenceTask,
}

impl HfInferenceAdapter {
    pub fn new(task: InferenceTask) -> Self {
        Self { task }
    }
}

#[async_trait]
impl ProviderTaskAdapter for HfInferenceAdapter {
    fn provider(&self) -> InferenceProvider {
        InferenceProvider::HfInference
    }

    fn task(&self) -> InferenceTask {
        self.task
    }

    fn make_route(&self, model: &str) -> String {
        match self.task {
            InferenceTask::ChatCompletion => format!("models/{model}/v1/chat/completions"),
            _ => format!("models/{model}"),
        }
    }

    fn prepare_payload(
        &self,
        args: &RequestPayload,
        model: &str,
    ) -> Result<RequestPayload, InferError> {
        match self.task {
            InferenceTask::ChatCompletion => Ok(openai_compatible_body(args, model)),
            // Model is addressed by the route; the body is the caller's
            // `inputs`/`parameters` mapping as-is.
            _ => Ok(args.clone()),
        }
    }

    async fn get_response(
        &self,
        raw: RawResponse,
        _transport: &dyn HttpTransport,
    ) -> Result<InferenceOutput, InferError> {
        Ok(passthrough_response(raw))
    }
}
