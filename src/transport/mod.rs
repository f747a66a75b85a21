//! Transport seam between the client and the network.
//!
//! The client only needs one capability from the outside world: send a
//! request (method, URL, headers, bytes) and get the status plus raw body
//! back. [`HttpTransport`] does this with reqwest; tests and applications
//! with their own HTTP stack implement [`Transport`] directly.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::Method;
use tokio_util::sync::CancellationToken;
use url::Url;

/// A fully built request, ready to be sent.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TransportRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Raw answer from the remote service.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request. Implementations must return [`TransportError::Cancelled`]
    /// once `cancel` fires instead of waiting for the remote side.
    async fn send(
        &self,
        request: TransportRequest,
        cancel: &CancellationToken,
    ) -> std::result::Result<TransportResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request cancelled")]
    Cancelled,

    #[error("Transport error: {0}")]
    Other(String),
}
