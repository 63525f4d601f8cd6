//! Injected HTTP transport seam.
//!
//! The routing layer never opens sockets on its own: the primary call and
//! the two documented secondary fetches (polling artifact retrieval, sample
//! download) all go through [`HttpTransport`]. Timeouts, proxies and
//! connection pooling are the transport's business, not this crate's.

use async_trait::async_trait;
use bytes::Bytes;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::error::InferError;

/// Untyped raw value returned by the transport layer.
#[derive(Debug, Clone)]
pub enum RawResponse {
    /// Body parsed as JSON.
    Json(Value),
    /// Non-JSON body (image/audio bytes).
    Bytes(Bytes),
}

/// Minimal HTTP capability the routing layer depends on.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST a JSON body and return the raw response.
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse, InferError>;

    /// GET a URL and return the body bytes.
    async fn get_bytes(&self, url: &str) -> Result<Bytes, InferError>;
}

/// Default transport backed by `reqwest`.
pub struct ReqwestTransport {
    client: reqwest::Client,
    token: Option<SecretString>,
}

impl ReqwestTransport {
    /// Create a transport without credentials.
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            token: None,
        }
    }

    /// Attach a bearer credential sent with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::from(token.into()));
        self
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token.expose_secret()),
            None => req,
        }
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse, InferError> {
        let response = self
            .authorize(self.client.post(url))
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            Ok(RawResponse::Json(response.json::<Value>().await?))
        } else {
            Ok(RawResponse::Bytes(response.bytes().await?))
        }
    }

    async fn get_bytes(&self, url: &str) -> Result<Bytes, InferError> {
        let response = self
            .authorize(self.client.get(url))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?)
    }
}
