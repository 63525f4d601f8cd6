//! Static per-provider configuration.
//!
//! One read-only table maps each provider to its default base URL, its
//! default credential type and the client-side-routing-only flag. The table
//! is pure data: built at compile time, never mutated, no teardown.

use crate::types::{AuthMethod, InferenceProvider};

/// Static configuration for one provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderDescriptor {
    pub provider: InferenceProvider,
    /// Default base URL, used when the caller supplies no endpoint override.
    pub base_url: &'static str,
    /// A client-side-routing-only provider must always be called directly
    /// with its own key, never proxied through the router.
    pub client_side_routing_only: bool,
    /// Credential type the provider expects by default.
    pub default_auth: AuthMethod,
}

const AUTO: ProviderDescriptor = ProviderDescriptor {
    provider: InferenceProvider::Auto,
    base_url: "https://router.huggingface.co",
    client_side_routing_only: false,
    default_auth: AuthMethod::HfToken,
};

const HF_INFERENCE: ProviderDescriptor = ProviderDescriptor {
    provider: InferenceProvider::HfInference,
    base_url: "https://api-inference.huggingface.co",
    client_side_routing_only: false,
    default_auth: AuthMethod::HfToken,
};

const OPENAI: ProviderDescriptor = ProviderDescriptor {
    provider: InferenceProvider::OpenAi,
    base_url: "https://api.openai.com",
    client_side_routing_only: true,
    default_auth: AuthMethod::ProviderKey,
};

const TOGETHER: ProviderDescriptor = ProviderDescriptor {
    provider: InferenceProvider::Together,
    base_url: "https://api.together.xyz",
    client_side_routing_only: false,
    default_auth: AuthMethod::ProviderKey,
};

const NEBIUS: ProviderDescriptor = ProviderDescriptor {
    provider: InferenceProvider::Nebius,
    base_url: "https://api.studio.nebius.ai",
    client_side_routing_only: false,
    default_auth: AuthMethod::ProviderKey,
};

const FAL_AI: ProviderDescriptor = ProviderDescriptor {
    provider: InferenceProvider::FalAi,
    base_url: "https://queue.fal.run",
    client_side_routing_only: false,
    default_auth: AuthMethod::ProviderKey,
};

const BLACK_FOREST_LABS: ProviderDescriptor = ProviderDescriptor {
    provider: InferenceProvider::BlackForestLabs,
    base_url: "https://api.us1.bfl.ai",
    client_side_routing_only: false,
    default_auth: AuthMethod::ProviderKey,
};

/// Look up the static descriptor for a provider.
///
/// Total over the closed provider set.
pub const fn descriptor(provider: InferenceProvider) -> &'static ProviderDescriptor {
    match provider {
        InferenceProvider::Auto => &AUTO,
        InferenceProvider::HfInference => &HF_INFERENCE,
        InferenceProvider::OpenAi => &OPENAI,
        InferenceProvider::Together => &TOGETHER,
        InferenceProvider::Nebius => &NEBIUS,
        InferenceProvider::FalAi => &FAL_AI,
        InferenceProvider::BlackForestLabs => &BLACK_FOREST_LABS,
    }
}
