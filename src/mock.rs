//! # Test Doubles
//!
//! Two seams can be faked in tests:
//!
//! | Seam | Double | Use Case |
//! |------|--------|----------|
//! | HTTP | [`MockTransport`] | Scripted responses, recorded requests, error injection |
//! | Page | [`create_mock_view`] + `expect_*` helpers | Asserting the exact sequence of page updates |
//!
//! For most tests the real [`PageActor`](crate::view::PageActor) is the better page
//! double: it is in-memory and deterministic. Reach for [`create_mock_view`] when the
//! *order* of updates is what you are testing.
//!
//! ## Example
//!
//! ```rust
//! use order_viewer::api::ApiClient;
//! use order_viewer::mock::MockTransport;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockTransport::new();
//!     mock.expect_get("http://proxy.test/api/v2/orders/O1")
//!         .return_json(200, json!({"order": {"id": "O1"}}));
//!
//!     let client = ApiClient::new(mock.clone(), "http://proxy.test");
//!     let response = client.retrieve_order("O1").await.unwrap();
//!     assert_eq!(response.order.unwrap().id, "O1");
//!
//!     mock.verify();
//! }
//! ```

use crate::api::{ApiError, HttpRequest, HttpResponse, HttpTransport, Method};
use crate::view::{ViewClient, ViewRequest};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// HTTP TRANSPORT
// =============================================================================

/// A scripted reply, optionally held back until a gate opens.
struct Expectation {
    method: Method,
    url: String,
    response: Result<HttpResponse, ApiError>,
    gate: Option<oneshot::Receiver<()>>,
}

/// An [`HttpTransport`] that answers from a queue of expectations.
///
/// Clones share the same queue and request log, so keep one clone in the test
/// and hand the other to the [`ApiClient`](crate::api::ApiClient).
#[derive(Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `GET` to `url`.
    pub fn expect_get(&mut self, url: impl Into<String>) -> ExpectationBuilder {
        self.expect_request(Method::Get, url)
    }

    /// Expects a request with the given method to `url`.
    pub fn expect_request(&mut self, method: Method, url: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            url: url.into(),
            gate: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Panics if any expectation is still pending.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        let expectation = self.expectations.lock().unwrap().pop_front();

        let Some(expectation) = expectation else {
            panic!("Unexpected request: {} {}", request.method.as_str(), request.url);
        };
        if expectation.method != request.method || expectation.url != request.url {
            panic!(
                "Expected {} {}, got {} {}",
                expectation.method.as_str(),
                expectation.url,
                request.method.as_str(),
                request.url
            );
        }

        if let Some(gate) = expectation.gate {
            let _ = gate.await;
        }
        expectation.response
    }
}

/// Builder for a single [`MockTransport`] expectation.
pub struct ExpectationBuilder {
    method: Method,
    url: String,
    gate: Option<oneshot::Receiver<()>>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Holds the reply until `gate` fires (or its sender is dropped).
    pub fn after(mut self, gate: oneshot::Receiver<()>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn return_response(self, response: HttpResponse) {
        self.push(Ok(response));
    }

    /// Replies with `body` serialized as JSON.
    pub fn return_json(self, status: u16, body: serde_json::Value) {
        self.push(Ok(HttpResponse::new(status, body.to_string())));
    }

    /// Replies with a raw, possibly non-JSON body.
    pub fn return_raw(self, status: u16, body: impl Into<String>) {
        self.push(Ok(HttpResponse::new(status, body)));
    }

    /// Fails at the transport level.
    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<HttpResponse, ApiError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            method: self.method,
            url: self.url,
            response,
            gate: self.gate,
        });
    }
}

// =============================================================================
// PAGE
// =============================================================================

/// Creates a view client whose requests land on a receiver the test controls.
pub fn create_mock_view(buffer_size: usize) -> (ViewClient, mpsc::Receiver<ViewRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ViewClient::new(sender), receiver)
}

/// Next request must be `ReadInput`.
pub async fn expect_read_input(
    receiver: &mut mpsc::Receiver<ViewRequest>,
) -> Option<oneshot::Sender<String>> {
    match receiver.recv().await {
        Some(ViewRequest::ReadInput { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next request must be `ShowLoader`.
pub async fn expect_show_loader(
    receiver: &mut mpsc::Receiver<ViewRequest>,
) -> Option<(String, oneshot::Sender<()>)> {
    match receiver.recv().await {
        Some(ViewRequest::ShowLoader {
            message,
            respond_to,
        }) => Some((message, respond_to)),
        _ => None,
    }
}

/// Next request must be `HideLoader`.
pub async fn expect_hide_loader(
    receiver: &mut mpsc::Receiver<ViewRequest>,
) -> Option<oneshot::Sender<()>> {
    match receiver.recv().await {
        Some(ViewRequest::HideLoader { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next request must be `ShowError`.
pub async fn expect_show_error(
    receiver: &mut mpsc::Receiver<ViewRequest>,
) -> Option<(String, oneshot::Sender<()>)> {
    match receiver.recv().await {
        Some(ViewRequest::ShowError {
            message,
            respond_to,
        }) => Some((message, respond_to)),
        _ => None,
    }
}

/// Next request must be `DisplayOrder`.
pub async fn expect_display_order(
    receiver: &mut mpsc::Receiver<ViewRequest>,
) -> Option<(String, oneshot::Sender<()>)> {
    match receiver.recv().await {
        Some(ViewRequest::DisplayOrder { html, respond_to }) => Some((html, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_transport_replays_in_order() {
        let mut mock = MockTransport::new();
        mock.expect_get("http://a/1").return_json(200, json!({"n": 1}));
        mock.expect_get("http://a/2")
            .return_err(ApiError::Transport("connection reset".to_string()));

        let request = |url: &str| HttpRequest {
            method: Method::Get,
            url: url.to_string(),
            headers: vec![],
            body: None,
        };

        let first = mock.send(request("http://a/1")).await.unwrap();
        assert_eq!(first.body, r#"{"n":1}"#);

        let second = mock.send(request("http://a/2")).await;
        assert_eq!(
            second,
            Err(ApiError::Transport("connection reset".to_string()))
        );

        assert_eq!(mock.requests().len(), 2);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_panics_on_pending_expectation() {
        let mut mock = MockTransport::new();
        mock.expect_get("http://a/1").return_json(200, json!({}));
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_view_hands_out_requests() {
        let (view, mut receiver) = create_mock_view(4);
        let task = tokio::spawn(async move { view.display_order("<p>x</p>".to_string()).await });

        let (html, responder) = expect_display_order(&mut receiver)
            .await
            .expect("Expected DisplayOrder");
        assert_eq!(html, "<p>x</p>");
        responder.send(()).unwrap();

        assert!(task.await.unwrap().is_ok());
    }
}
