//! In-crate test doubles for the transport seam.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use crate::error::InferError;
use crate::transport::{HttpTransport, RawResponse};

/// Transport that must never be reached.
pub(crate) struct NullTransport;

#[async_trait]
impl HttpTransport for NullTransport {
    async fn post_json(&self, url: &str, _body: &Value) -> Result<RawResponse, InferError> {
        panic!("unexpected POST to {url}");
    }

    async fn get_bytes(&self, url: &str) -> Result<Bytes, InferError> {
        panic!("unexpected GET to {url}");
    }
}

/// Transport that replays canned responses and counts calls, so tests can
/// assert exactly one vs. two network calls per scenario.
pub(crate) struct RecordingTransport {
    post_reply: Value,
    posts: AtomicUsize,
    gets: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl RecordingTransport {
    pub(crate) fn json(post_reply: Value) -> Self {
        Self {
            post_reply,
            posts: AtomicUsize::new(0),
            gets: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn post_count(&self) -> usize {
        self.posts.load(Ordering::SeqCst)
    }

    pub(crate) fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub(crate) fn last_url(&self) -> Option<String> {
        self.urls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn post_json(&self, url: &str, _body: &Value) -> Result<RawResponse, InferError> {
        self.posts.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        Ok(RawResponse::Json(self.post_reply.clone()))
    }

    async fn get_bytes(&self, url: &str) -> Result<Bytes, InferError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        Ok(Bytes::from_static(b"artifact"))
    }
}
