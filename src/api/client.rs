//! # API Client
//!
//! Thin JSON client for the proxy backend. Every request goes to
//! `{base_url}/api{path}` with `Content-Type: application/json`, the body is
//! parsed as JSON whatever the status, and non-success responses become an
//! [`ApiError::Status`] carrying the most specific message the body offers.

use crate::api::transport::{HttpRequest, HttpTransport, Method};
use crate::api::{ApiError, FALLBACK_ERROR_MESSAGE};
use crate::model::OrderResponse;
use reqwest::Url;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Caller-supplied request options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Client for the proxy backend, generic over the transport.
pub struct ApiClient<T: HttpTransport> {
    transport: Arc<T>,
    base_url: String,
}

impl<T: HttpTransport> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport: Arc::new(transport),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to the `/api` root.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Issues a request and returns the parsed JSON body.
    #[instrument(skip(self, options), fields(method = options.method.as_str()))]
    pub async fn fetch(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        self.fetch_url(self.url_for(path), options).await
    }

    async fn fetch_url(&self, url: String, options: RequestOptions) -> Result<Value, ApiError> {
        let body = options
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::MalformedBody(e.to_string()))?;

        let request = HttpRequest {
            method: options.method,
            url,
            headers: merge_headers(options.headers),
            body,
        };
        debug!(url = %request.url, "Sending request");

        let response = self.transport.send(request).await?;
        let data: Value = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::MalformedBody(e.to_string()))?;

        if !response.is_success() {
            let message = error_message(&data);
            warn!(status = response.status, %message, "Request failed");
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }

        Ok(data)
    }

    /// Retrieves a single order by id (`GET /v2/orders/{id}`).
    #[instrument(skip(self))]
    pub async fn retrieve_order(&self, order_id: &str) -> Result<OrderResponse, ApiError> {
        let url = self.order_url(order_id)?;
        let data = self.fetch_url(url, RequestOptions::default()).await?;
        serde_json::from_value(data).map_err(|e| ApiError::MalformedBody(e.to_string()))
    }

    // The id comes from user input and is pushed as a single escaped segment,
    // so it cannot change the request path.
    fn order_url(&self, order_id: &str) -> Result<String, ApiError> {
        let mut url = Url::parse(&self.url_for("/v2/orders"))
            .map_err(|e| ApiError::Transport(format!("Invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport(format!("Invalid base URL: {}", self.base_url)))?
            .push(order_id);
        Ok(url.to_string())
    }
}

/// Caller headers first, then the fixed JSON content type, which replaces any
/// caller-supplied `Content-Type`.
fn merge_headers(headers: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = headers
        .into_iter()
        .filter(|(name, _)| !name.eq_ignore_ascii_case("content-type"))
        .collect();
    merged.push(("Content-Type".to_string(), "application/json".to_string()));
    merged
}

/// Picks the user-facing message out of an error body.
///
/// Priority: `errors[0].detail`, then a top-level string `error`, then
/// [`FALLBACK_ERROR_MESSAGE`]. Empty strings count as absent.
pub fn error_message(data: &Value) -> String {
    data.pointer("/errors/0/detail")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            data.get("error")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        })
        .unwrap_or(FALLBACK_ERROR_MESSAGE)
        .to_string()
}
