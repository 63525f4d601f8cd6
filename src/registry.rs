//! Adapter registry and dispatcher.
//!
//! Maps each supported (provider, task) pair to its one adapter instance.
//! The table is built once at startup; there is no dynamic registration,
//! and resolution fails fast instead of guessing a default.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::adapters::{
    AutoRouterAdapter, BlackForestLabsTextToImageAdapter, FalAiTextToImageAdapter,
    HfInferenceAdapter, OPENAI_CHAT_ROUTE, OpenAiCompatibleAdapter, ProviderTaskAdapter,
    TogetherTextToImageAdapter,
};
use crate::error::InferError;
use crate::types::{InferenceProvider, InferenceTask};

/// Lookup table from (provider, task) to a shared adapter instance.
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: HashMap<(InferenceProvider, InferenceTask), Arc<dyn ProviderTaskAdapter>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter under its own (provider, task) key.
    pub fn register(&mut self, adapter: Arc<dyn ProviderTaskAdapter>) {
        self.adapters
            .insert((adapter.provider(), adapter.task()), adapter);
    }

    /// Resolve the adapter for a pair, failing fast when none exists.
    pub fn resolve(
        &self,
        provider: InferenceProvider,
        task: InferenceTask,
    ) -> Result<Arc<dyn ProviderTaskAdapter>, InferError> {
        self.adapters
            .get(&(provider, task))
            .cloned()
            .ok_or(InferError::UnsupportedCombination { provider, task })
    }

    /// Whether a pair is supported.
    pub fn supports(&self, provider: InferenceProvider, task: InferenceTask) -> bool {
        self.adapters.contains_key(&(provider, task))
    }

    /// All supported pairs, in no particular order.
    pub fn supported_pairs(&self) -> Vec<(InferenceProvider, InferenceTask)> {
        self.adapters.keys().copied().collect()
    }
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("pairs", &self.adapters.len())
            .finish()
    }
}

fn build_default() -> AdapterRegistry {
    use InferenceProvider::*;
    use InferenceTask::*;

    let mut registry = AdapterRegistry::new();

    registry.register(Arc::new(AutoRouterAdapter::new()));

    registry.register(Arc::new(HfInferenceAdapter::new(ChatCompletion)));
    registry.register(Arc::new(HfInferenceAdapter::new(TextGeneration)));
    registry.register(Arc::new(HfInferenceAdapter::new(FeatureExtraction)));

    registry.register(Arc::new(OpenAiCompatibleAdapter::new(
        OpenAi,
        ChatCompletion,
        OPENAI_CHAT_ROUTE,
    )));

    registry.register(Arc::new(OpenAiCompatibleAdapter::new(
        Together,
        ChatCompletion,
        OPENAI_CHAT_ROUTE,
    )));
    registry.register(Arc::new(OpenAiCompatibleAdapter::new(
        Together,
        TextGeneration,
        "v1/completions",
    )));
    registry.register(Arc::new(TogetherTextToImageAdapter::new()));

    registry.register(Arc::new(OpenAiCompatibleAdapter::new(
        Nebius,
        ChatCompletion,
        OPENAI_CHAT_ROUTE,
    )));

    registry.register(Arc::new(FalAiTextToImageAdapter::new()));
    registry.register(Arc::new(BlackForestLabsTextToImageAdapter::new()));

    registry
}

/// The process-wide registry with the full supported matrix, built once.
pub fn default_registry() -> &'static AdapterRegistry {
    static REGISTRY: OnceLock<AdapterRegistry> = OnceLock::new();
    REGISTRY.get_or_init(build_default)
}
