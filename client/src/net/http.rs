//! Shared HTTP client wrapper for the `/api` backend.
//!
//! DESIGN
//! ======
//! Requests are first shaped into plain [`ApiRequest`] values and only then
//! handed to a [`Transport`]. The bearer token is read from the
//! [`TokenStore`] at shaping time, so clearing the store drops the
//! `Authorization` header from every later request.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps to [`ApiError`]. Callers decide whether to surface it;
//! nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use qrwire::{ErrorBody, endpoints};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::token::{LocalTokenStore, TokenStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully shaped request, ready for a transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    /// Value of the `Authorization` header, if a token was present.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Status and body text of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("invalid response: {0}")]
    Decode(String),
    /// No transport available (server-side render).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Whether the backend rejected the credential.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }

    /// Backend-provided message, or `fallback` when there is none.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Executes shaped requests.
///
/// Futures are not `Send`: the browser transport runs on the single-threaded
/// WASM event loop.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response was received.
    async fn execute(&self, request: &ApiRequest) -> Result<RawResponse, ApiError>;
}

/// `fetch`-backed transport via `gloo-net`. Unavailable outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait::async_trait(?Send)]
impl Transport for FetchTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            if let Some(auth) = request.authorization() {
                builder = builder.header("Authorization", &auth);
            }
            let resp = match &request.body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

/// The single shared client: base path, token store and transport.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    tokens: Arc<dyn TokenStore>,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    #[must_use]
    pub fn new(base: impl Into<String>, tokens: Arc<dyn TokenStore>, transport: Arc<dyn Transport>) -> Self {
        Self { base: base.into(), tokens, transport }
    }

    /// Same-origin `/api` client backed by `localStorage` and `fetch`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(endpoints::API_BASE, Arc::new(LocalTokenStore), Arc::new(FetchTransport))
    }

    #[must_use]
    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    #[must_use]
    pub fn get(&self, path: &str) -> ApiRequest {
        self.shape(Method::Get, endpoints::join(&self.base, path), None)
    }

    /// `GET` with an already encoded query string (no leading `?`).
    #[must_use]
    pub fn get_with_query(&self, path: &str, query: &str) -> ApiRequest {
        let mut url = endpoints::join(&self.base, path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        self.shape(Method::Get, url, None)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized.
    pub fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiRequest, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(self.shape(Method::Post, endpoints::join(&self.base, path), Some(body)))
    }

    fn shape(&self, method: Method, url: String, body: Option<serde_json::Value>) -> ApiRequest {
        ApiRequest { method, url, body, bearer: self.tokens.get() }
    }

    /// Send and decode a JSON response body.
    ///
    /// # Errors
    ///
    /// Returns the transport error, a [`ApiError::Status`] for non-2xx
    /// answers, or [`ApiError::Decode`] for an unexpected body.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let raw = self.exchange(&request).await?;
        decode_response(raw)
    }

    /// Send a request whose success body is ignored.
    ///
    /// # Errors
    ///
    /// Returns the transport error or a [`ApiError::Status`] for non-2xx answers.
    pub async fn send_empty(&self, request: ApiRequest) -> Result<(), ApiError> {
        let raw = self.exchange(&request).await?;
        check_status(&raw)
    }

    async fn exchange(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        let result = self.transport.execute(request).await;
        if let Err(e) = &result {
            leptos::logging::warn!("{:?} {} failed: {e}", request.method, request.url);
        }
        result
    }
}

/// Map a non-2xx response to [`ApiError::Status`].
///
/// # Errors
///
/// Returns [`ApiError::Status`] carrying the backend `message`, if any.
pub fn check_status(raw: &RawResponse) -> Result<(), ApiError> {
    if raw.is_success() {
        return Ok(());
    }
    Err(ApiError::Status { status: raw.status, message: ErrorBody::message_from(&raw.body) })
}

/// Check status, then decode the JSON body.
///
/// # Errors
///
/// Returns [`ApiError::Status`] or [`ApiError::Decode`].
pub fn decode_response<T: DeserializeOwned>(raw: RawResponse) -> Result<T, ApiError> {
    check_status(&raw)?;
    serde_json::from_str(&raw.body).map_err(|e| ApiError::Decode(e.to_string()))
}
