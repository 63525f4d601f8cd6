//! Core identity types shared across the routing layer.
//!
//! Tasks, providers and auth methods are closed sets defined once at process
//! start; adapters and the registry key off them. There is intentionally no
//! dynamic registration of new providers at runtime.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The inference task the caller wants to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InferenceTask {
    ChatCompletion,
    TextGeneration,
    FeatureExtraction,
    TextToImage,
}

impl InferenceTask {
    /// Stable wire identifier for this task.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::ChatCompletion => "chat-completion",
            Self::TextGeneration => "text-generation",
            Self::FeatureExtraction => "feature-extraction",
            Self::TextToImage => "text-to-image",
        }
    }
}

impl std::fmt::Display for InferenceTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A third-party inference backend.
///
/// `Auto` is a meta-provider: the remote router service picks the concrete
/// backend, and only Hugging Face tokens are accepted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InferenceProvider {
    Auto,
    HfInference,
    #[serde(rename = "openai")]
    OpenAi,
    Together,
    Nebius,
    FalAi,
    BlackForestLabs,
}

impl InferenceProvider {
    /// Stable wire identifier for this provider.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::HfInference => "hf-inference",
            Self::OpenAi => "openai",
            Self::Together => "together",
            Self::Nebius => "nebius",
            Self::FalAi => "fal-ai",
            Self::BlackForestLabs => "black-forest-labs",
        }
    }
}

impl std::fmt::Display for InferenceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Which credential the caller supplied.
///
/// The routing layer never looks up secrets itself; it only checks that the
/// method is one the target provider accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMethod {
    /// A Hugging Face style bearer token, accepted by the router and by
    /// providers that can be proxied through it.
    HfToken,
    /// The provider's own API key for direct calls.
    ProviderKey,
}

/// Generic call arguments as an open string-keyed mapping.
///
/// Adapters read from this and build a new mapping; the caller's copy is
/// never mutated.
pub type RequestPayload = serde_json::Map<String, Value>;

/// A long-running job handle returned before the final artifact exists.
///
/// The caller (or a layer above this crate) is responsible for re-polling
/// `polling_url`; this core never polls on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingJob {
    pub id: String,
    pub polling_url: String,
    pub status: String,
}

impl PendingJob {
    pub fn pending(id: impl Into<String>, polling_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            polling_url: polling_url.into(),
            status: "pending".to_string(),
        }
    }
}

/// Normalized result of one adapter invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceOutput {
    /// JSON-compatible domain data, passed through for the caller to decode.
    Json(Value),
    /// Raw binary artifact (image, audio).
    Binary(Bytes),
    /// The job was accepted but is not finished yet.
    Pending(PendingJob),
}

/// The uniform call shape accepted by [`crate::client::InferenceClient`].
#[derive(Debug, Clone)]
pub struct InferenceRequest {
    pub provider: InferenceProvider,
    pub task: InferenceTask,
    pub model: String,
    pub args: RequestPayload,
    pub auth_method: AuthMethod,
    /// Optional base URL override; always wins over the provider default.
    pub endpoint_url: Option<String>,
}
