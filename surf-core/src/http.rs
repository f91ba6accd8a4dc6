//! Outbound HTTP plumbing used by the forecast client.
//!
//! The client only depends on the [`HttpFetcher`] trait, so tests (and callers
//! with their own transport) can swap the reqwest implementation out.

use async_trait::async_trait;
use reqwest::{Client, header};
use serde_json::Value;
use std::fmt::Debug;
use thiserror::Error;

/// Successful response envelope: status plus the decoded JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub data: Value,
}

/// Why a GET did not produce a usable [`Response`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// The request never completed (DNS, connect, timeout, unreadable body).
    #[error("{message}")]
    Transport { message: String },

    /// The remote service answered, but with an error status.
    #[error("request failed with status {status}: {body}")]
    Response { status: u16, body: Value },
}

impl RequestError {
    pub fn transport(message: impl Into<String>) -> Self {
        RequestError::Transport { message: message.into() }
    }
}

/// True when the failure carries a response from the remote service.
///
/// For callers holding a `RequestError` that only need the yes/no answer;
/// the StormGlass client maps the two variants directly.
pub fn is_provider_error_response(error: &RequestError) -> bool {
    matches!(error, RequestError::Response { .. })
}

#[async_trait]
pub trait HttpFetcher: Send + Sync + Debug {
    async fn get(&self, url: &str) -> Result<Response, RequestError>;
}

/// [`HttpFetcher`] backed by `reqwest`, sending the provider token on every call.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    api_token: String,
    http: Client,
}

impl ReqwestFetcher {
    pub fn new(api_token: String) -> Self {
        Self { api_token, http: Client::new() }
    }

    pub fn with_client(api_token: String, http: Client) -> Self {
        Self { api_token, http }
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<Response, RequestError> {
        tracing::debug!(url, "sending GET");

        let res = self
            .http
            .get(url)
            .header(header::AUTHORIZATION, self.api_token.as_str())
            .send()
            .await
            .map_err(|e| RequestError::transport(e.to_string()))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| RequestError::transport(e.to_string()))?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(RequestError::Response {
                status: status.as_u16(),
                body: decode_error_body(&body),
            });
        }

        let data = serde_json::from_str(&body).map_err(|e| {
            RequestError::transport(format!("invalid JSON in response body: {e}"))
        })?;

        Ok(Response { status: status.as_u16(), data })
    }
}

/// Error payloads are kept as JSON when they parse, otherwise as the raw text.
fn decode_error_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
