//! Response normalization through the full client path, asserting exactly
//! how many transport calls each scenario makes.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use inferoute::{
    AuthMethod, HttpTransport, InferError, InferenceClient, InferenceOutput, InferenceProvider,
    InferenceRequest, InferenceTask, PendingJob, RawResponse,
};
use serde_json::{Value, json};

/// Canned transport that counts POSTs and GETs.
struct ScriptedTransport {
    post_reply: Value,
    get_reply: Result<Bytes, String>,
    posts: AtomicUsize,
    gets: AtomicUsize,
    get_urls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    fn new(post_reply: Value) -> Self {
        Self {
            post_reply,
            get_reply: Ok(Bytes::from_static(b"image-bytes")),
            posts: AtomicUsize::new(0),
            gets: AtomicUsize::new(0),
            get_urls: Mutex::new(Vec::new()),
        }
    }

    fn failing_get(post_reply: Value, message: &str) -> Self {
        let mut transport = Self::new(post_reply);
        transport.get_reply = Err(message.to_string());
        transport
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn post_json(&self, _url: &str, _body: &Value) -> Result<RawResponse, InferError> {
        self.posts.fetch_add(1, Ordering::SeqCst);
        Ok(RawResponse::Json(self.post_reply.clone()))
    }

    async fn get_bytes(&self, url: &str) -> Result<Bytes, InferError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.get_urls.lock().unwrap().push(url.to_string());
        match &self.get_reply {
            Ok(bytes) => Ok(bytes.clone()),
            Err(message) => Err(InferError::Http(message.clone())),
        }
    }
}

fn image_request(provider: InferenceProvider, model: &str) -> InferenceRequest {
    InferenceRequest {
        provider,
        task: InferenceTask::TextToImage,
        model: model.to_string(),
        args: json!({"inputs": "a cat"}).as_object().unwrap().clone(),
        auth_method: AuthMethod::ProviderKey,
        endpoint_url: None,
    }
}

#[tokio::test]
async fn pending_job_returns_handle_with_one_call() {
    let transport = Arc::new(ScriptedTransport::new(json!({
        "id": "42",
        "polling_url": "https://x"
    })));
    let client = InferenceClient::new(transport.clone());

    let out = client
        .run(&image_request(InferenceProvider::BlackForestLabs, "flux-pro"))
        .await
        .unwrap();

    assert_eq!(
        out,
        InferenceOutput::Pending(PendingJob::pending("42", "https://x"))
    );
    assert_eq!(transport.posts.load(Ordering::SeqCst), 1);
    assert_eq!(transport.gets.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn terminal_polling_result_fetches_artifact_with_second_call() {
    let transport = Arc::new(ScriptedTransport::new(json!({
        "status": "Ready",
        "result": {"sample": "https://delivery.test/sample.png"}
    })));
    let client = InferenceClient::new(transport.clone());

    let out = client
        .run(&image_request(InferenceProvider::BlackForestLabs, "flux-pro"))
        .await
        .unwrap();

    assert_eq!(out, InferenceOutput::Binary(Bytes::from_static(b"image-bytes")));
    assert_eq!(transport.posts.load(Ordering::SeqCst), 1);
    assert_eq!(transport.gets.load(Ordering::SeqCst), 1);
    assert_eq!(
        transport.get_urls.lock().unwrap().as_slice(),
        ["https://delivery.test/sample.png"]
    );
}

#[tokio::test]
async fn failed_artifact_fetch_names_the_url() {
    let transport = Arc::new(ScriptedTransport::failing_get(
        json!({
            "status": "Ready",
            "result": {"sample": "https://delivery.test/gone.png"}
        }),
        "connection reset",
    ));
    let client = InferenceClient::new(transport.clone());

    let err = client
        .run(&image_request(InferenceProvider::BlackForestLabs, "flux-pro"))
        .await
        .unwrap_err();

    match err {
        InferError::OutputValidation { message, raw } => {
            assert!(message.contains("https://delivery.test/gone.png"));
            assert!(raw.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // Exactly one secondary fetch was attempted, never retried.
    assert_eq!(transport.gets.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fal_queue_statuses_normalize() {
    let transport = Arc::new(ScriptedTransport::new(json!({
        "status": "IN_PROGRESS",
        "request_id": "req-7",
        "status_url": "https://queue.fal.run/status/req-7"
    })));
    let client = InferenceClient::new(transport.clone());

    let out = client
        .run(&image_request(InferenceProvider::FalAi, "fal-ai/flux/dev"))
        .await
        .unwrap();
    assert_eq!(
        out,
        InferenceOutput::Pending(PendingJob::pending(
            "req-7",
            "https://queue.fal.run/status/req-7"
        ))
    );

    let transport = Arc::new(ScriptedTransport::new(json!({
        "status": "COMPLETED",
        "response_url": "https://queue.fal.run/result/req-7"
    })));
    let client = InferenceClient::new(transport.clone());
    let out = client
        .run(&image_request(InferenceProvider::FalAi, "fal-ai/flux/dev"))
        .await
        .unwrap();
    assert_eq!(out, InferenceOutput::Binary(Bytes::from_static(b"image-bytes")));
    assert_eq!(transport.gets.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn base64_image_decodes_without_secondary_call() {
    let transport = Arc::new(ScriptedTransport::new(json!({
        "data": [{"b64_json": "aGVsbG8="}]
    })));
    let client = InferenceClient::new(transport.clone());

    let out = client
        .run(&image_request(InferenceProvider::Together, "FLUX.1-schnell"))
        .await
        .unwrap();

    assert_eq!(out, InferenceOutput::Binary(Bytes::from_static(b"hello")));
    assert_eq!(transport.posts.load(Ordering::SeqCst), 1);
    assert_eq!(transport.gets.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_base64_envelope_carries_raw_response() {
    let raw = json!({"data": "not-an-array"});
    let transport = Arc::new(ScriptedTransport::new(raw.clone()));
    let client = InferenceClient::new(transport);

    let err = client
        .run(&image_request(InferenceProvider::Together, "FLUX.1-schnell"))
        .await
        .unwrap_err();

    match err {
        InferError::OutputValidation { raw: Some(kept), .. } => assert_eq!(kept, raw),
        other => panic!("unexpected error: {other:?}"),
    }
}
