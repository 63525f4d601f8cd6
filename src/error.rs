//! Error types for inferoute.
//!
//! All three routing-layer error kinds are terminal at this layer: the core
//! never retries and never falls back to another provider. Any resilience
//! policy belongs to a layer above this crate.

use serde_json::Value;
use thiserror::Error;

use crate::types::{InferenceProvider, InferenceTask};

/// Errors surfaced by the routing layer.
#[derive(Error, Debug)]
pub enum InferError {
    /// The request violates a provider's authentication or routing
    /// constraints. The request never left the process.
    #[error("Routing error: {0}")]
    Routing(String),

    /// The provider's raw response does not match the shape the adapter
    /// expects. Carries the offending response for diagnostics.
    #[error("Output validation error: {message}")]
    OutputValidation {
        message: String,
        raw: Option<Value>,
    },

    /// No adapter is registered for this (provider, task) pair.
    #[error("Provider '{provider}' does not support task '{task}'")]
    UnsupportedCombination {
        provider: InferenceProvider,
        task: InferenceTask,
    },

    /// Transport-level failure reported by the injected HTTP client.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON serialization/deserialization failure.
    #[error("JSON error: {0}")]
    Json(String),
}

impl InferError {
    /// Shorthand for an output-validation failure carrying the raw response.
    pub fn output_validation(message: impl Into<String>, raw: Option<Value>) -> Self {
        Self::OutputValidation {
            message: message.into(),
            raw,
        }
    }
}

impl From<reqwest::Error> for InferError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<serde_json::Error> for InferError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
