//! # inferoute
//!
//! A unified inference-provider routing layer: one call shape for chat
//! completion, text generation, feature extraction and text-to-image across
//! third-party providers that each expose different base URLs, routes,
//! authentication rules, request schemas and response envelopes.
//!
//! The crate is the provider-adapter layer only. It selects the base URL
//! and route for a (provider, task, model) triple, enforces per-provider
//! authentication constraints, transforms the generic payload into the
//! provider's wire shape, and normalizes heterogeneous responses (including
//! polling envelopes and base64-encoded artifacts) back into a generic
//! result. Network transport is injected; credential storage, model
//! discovery and any retry/fallback policy live above this crate.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use inferoute::{
//!     AuthMethod, InferenceClient, InferenceProvider, InferenceRequest,
//!     InferenceTask, ReqwestTransport,
//! };
//!
//! # async fn example() -> Result<(), inferoute::InferError> {
//! let transport = ReqwestTransport::new(reqwest::Client::new()).with_token("hf_...");
//! let client = InferenceClient::new(Arc::new(transport));
//!
//! let output = client
//!     .run(&InferenceRequest {
//!         provider: InferenceProvider::Auto,
//!         task: InferenceTask::ChatCompletion,
//!         model: "meta-llama/Llama-3.1-8B-Instruct".to_string(),
//!         args: serde_json::json!({"messages": [{"role": "user", "content": "Hi"}]})
//!             .as_object()
//!             .cloned()
//!             .unwrap(),
//!         auth_method: AuthMethod::HfToken,
//!         endpoint_url: None,
//!     })
//!     .await?;
//! # let _ = output;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod client;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod response;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::ProviderTaskAdapter;
pub use client::InferenceClient;
pub use descriptor::{ProviderDescriptor, descriptor};
pub use error::InferError;
pub use registry::{AdapterRegistry, default_registry};
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};
pub use types::{
    AuthMethod, InferenceOutput, InferenceProvider, InferenceRequest, InferenceTask, PendingJob,
    RequestPayload,
};
