//! HTTP transport seam.
//!
//! The client never talks to the network directly; it hands a signed
//! [`RequestDescriptor`] to an [`HttpTransport`]. Connection pooling, TLS,
//! compression and timeouts are the transport's business.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{Result, ZanoxError};
use crate::request::RequestDescriptor;

const USER_AGENT: &str = concat!("zanoxapi/", env!("CARGO_PKG_VERSION"));

/// Default timeout applied when a request does not carry its own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Raw response handed back by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

/// Performs an HTTP GET described by a [`RequestDescriptor`].
///
/// Implementations must be safe to share across concurrent calls.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and return its status and body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed (network
    /// failure, timeout, TLS failure). Non-2xx responses are not errors.
    async fn send(&self, request: RequestDescriptor) -> Result<TransportResponse>;
}

/// [`HttpTransport`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Create a transport with the given default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(timeout)
            .build()
            .map_err(ZanoxError::HttpError)?;

        Ok(Self { http })
    }

    /// Wrap an existing `reqwest` client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: RequestDescriptor) -> Result<TransportResponse> {
        let mut builder = self.http.get(&request.url).headers(request.headers);
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(ZanoxError::HttpError)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(ZanoxError::HttpError)?;

        Ok(TransportResponse { status, body })
    }
}
