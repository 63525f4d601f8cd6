//! Provider adapter system.
//!
//! Every supported (provider, task) pair is one implementation of
//! [`ProviderTaskAdapter`]: build the route, build the URL, transform the
//! generic payload into the provider's wire shape, and normalize the raw
//! response back into a generic result. Adapters are stateless after
//! construction apart from their immutable descriptor configuration, so a
//! single shared instance per pair suffices.
//!
//! Adapters never retry and never fall back to another provider; routing
//! and output-validation errors surface to the caller unchanged.

use async_trait::async_trait;
use serde_json::Value;

use crate::descriptor::{ProviderDescriptor, descriptor};
use crate::error::InferError;
use crate::transport::{HttpTransport, RawResponse};
use crate::types::{AuthMethod, InferenceOutput, InferenceProvider, InferenceTask, RequestPayload};

pub mod auto;
pub mod black_forest_labs;
pub mod fal_ai;
pub mod hf_inference;
pub mod openai_compatible;
pub mod together;

pub use auto::AutoRouterAdapter;
pub use black_forest_labs::BlackForestLabsTextToImageAdapter;
pub use fal_ai::FalAiTextToImageAdapter;
pub use hf_inference::HfInferenceAdapter;
pub use openai_compatible::OpenAiCompatibleAdapter;
pub use together::TogetherTextToImageAdapter;

/// Fixed route used by every OpenAI-compatible chat provider.
pub const OPENAI_CHAT_ROUTE: &str = "v1/chat/completions";

/// The four-operation contract every concrete adapter implements.
#[async_trait]
pub trait ProviderTaskAdapter: Send + Sync + std::fmt::Debug {
    /// The provider this adapter speaks to.
    fn provider(&self) -> InferenceProvider;

    /// The task this adapter serves.
    fn task(&self) -> InferenceTask;

    /// Path segment appended to the base URL. Pure.
    fn make_route(&self, model: &str) -> String;

    /// Absolute request URL. Validates the auth method before computing
    /// anything; pure given the same inputs.
    fn make_url(
        &self,
        model: &str,
        auth: AuthMethod,
        endpoint_url: Option<&str>,
    ) -> Result<String, InferError> {
        resolve_url(
            descriptor(self.provider()),
            auth,
            endpoint_url,
            &self.make_route(model),
        )
    }

    /// Transform the generic argument mapping into the provider's expected
    /// JSON body. Pure; the caller's mapping is never mutated.
    fn prepare_payload(
        &self,
        args: &RequestPayload,
        model: &str,
    ) -> Result<RequestPayload, InferError>;

    /// Normalize the provider's raw output into a generic result.
    ///
    /// Mostly pure; polling adapters may issue one secondary fetch through
    /// `transport` to materialize a finished artifact.
    async fn get_response(
        &self,
        raw: RawResponse,
        transport: &dyn HttpTransport,
    ) -> Result<InferenceOutput, InferError>;
}

/// Single enforcement point for auth and routing constraints, shared by
/// every adapter's `make_url`. Checks run before any URL is computed.
pub(crate) fn resolve_url(
    desc: &ProviderDescriptor,
    auth: AuthMethod,
    endpoint_url: Option<&str>,
    route: &str,
) -> Result<String, InferError> {
    check_auth(desc, auth)?;
    let base = endpoint_url.unwrap_or(desc.base_url);
    Ok(format!(
        "{}/{}",
        base.trim_end_matches('/'),
        route.trim_start_matches('/')
    ))
}

fn check_auth(desc: &ProviderDescriptor, auth: AuthMethod) -> Result<(), InferError> {
    if desc.provider == InferenceProvider::Auto && auth != AuthMethod::HfToken {
        return Err(InferError::Routing(
            "the 'auto' router accepts only Hugging Face tokens; \
             pass a provider explicitly to use a provider key"
                .to_string(),
        ));
    }
    if desc.client_side_routing_only && auth != AuthMethod::ProviderKey {
        return Err(InferError::Routing(format!(
            "provider '{}' supports client-side routing only: it must be \
             called directly with its own API key, never through the router",
            desc.provider
        )));
    }
    Ok(())
}

/// OpenAI-compatible merge: caller keys pass through untouched and the
/// routed model wins for the `model` key only.
pub(crate) fn openai_compatible_body(args: &RequestPayload, model: &str) -> RequestPayload {
    let mut body = args.clone();
    body.insert("model".to_string(), Value::String(model.to_string()));
    body
}

/// Job-submission shape used by the dedicated image-generation services:
/// `inputs` becomes `prompt`, a nested `parameters` object is flattened to
/// the top level, both originals are dropped, remaining caller keys merge
/// in, and the routed model is set last.
pub(crate) fn job_submission_body(args: &RequestPayload, model: &str) -> RequestPayload {
    let mut body = RequestPayload::new();
    if let Some(inputs) = args.get("inputs") {
        body.insert("prompt".to_string(), inputs.clone());
    }
    if let Some(Value::Object(parameters)) = args.get("parameters") {
        for (key, value) in parameters {
            body.insert(key.clone(), value.clone());
        }
    }
    for (key, value) in args {
        if key == "inputs" || key == "parameters" {
            continue;
        }
        body.insert(key.clone(), value.clone());
    }
    body.insert("model".to_string(), Value::String(model.to_string()));
    body
}

/// Identity normalization for providers whose responses a higher layer
/// decodes: JSON passes through, a bytes body becomes a binary artifact.
pub(crate) fn passthrough_response(raw: RawResponse) -> InferenceOutput {
    match raw {
        RawResponse::Json(value) => InferenceOutput::Json(value),
        RawResponse::Bytes(bytes) => InferenceOutput::Binary(bytes),
    }
}
