//! Caller-facing entry point.
//!
//! [`InferenceClient`] wires the registry and an injected transport into the
//! uniform call shape: resolve adapter, build URL, transform payload, POST,
//! normalize. It adds no policy of its own — no retries, no provider
//! fallback, no credential lookup.

use std::sync::Arc;

use serde_json::Value;

use crate::adapters::ProviderTaskAdapter;
use crate::error::InferError;
use crate::registry::{AdapterRegistry, default_registry};
use crate::transport::HttpTransport;
use crate::types::{InferenceOutput, InferenceRequest};

/// Dispatches inference requests through the adapter registry.
#[derive(Clone)]
pub struct InferenceClient {
    transport: Arc<dyn HttpTransport>,
    registry: &'static AdapterRegistry,
}

impl InferenceClient {
    /// Create a client over the default registry.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            registry: default_registry(),
        }
    }

    /// Create a client over a caller-built registry.
    pub fn with_registry(transport: Arc<dyn HttpTransport>, registry: &'static AdapterRegistry) -> Self {
        Self {
            transport,
            registry,
        }
    }

    /// Run one inference request end to end.
    pub async fn run(&self, request: &InferenceRequest) -> Result<InferenceOutput, InferError> {
        let adapter = self.registry.resolve(request.provider, request.task)?;
        let url = adapter.make_url(
            &request.model,
            request.auth_method,
            request.endpoint_url.as_deref(),
        )?;
        let body = adapter.prepare_payload(&request.args, &request.model)?;

        tracing::debug!(
            provider = %request.provider,
            task = %request.task,
            model = %request.model,
            url = %url,
            "dispatching inference request"
        );

        let raw = self
            .transport
            .post_json(&url, &Value::Object(body))
            .await?;
        adapter.get_response(raw, self.transport.as_ref()).await
    }
}

impl std::fmt::Debug for InferenceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceClient")
            .field("registry", &self.registry)
            .finish()
    }
}
