//! Zanox API client.
//!
//! Low-level client that signs and dispatches GET requests and parses the
//! JSON bodies. Per-resource operations are implemented via traits on the
//! resource types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::error::{Result, ZanoxError};
use crate::request::{build_authenticated_get, build_query_url, QueryParams};
use crate::signing::Credentials;
use crate::transport::{HttpTransport, ReqwestTransport, TransportResponse, DEFAULT_TIMEOUT};

/// Versioned root of the publisher API.
pub const DEFAULT_API_URL: &str = "https://api.zanox.com/json/2011-03-01";

/// Longest body prefix kept in a [`ZanoxError::MalformedResponse`].
const BODY_SNIPPET_LEN: usize = 256;

/// A parsed API response.
///
/// The status is reported as received; service-level errors (including
/// authentication failures) arrive as non-2xx statuses with a JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed JSON body, unmodified.
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Consume the response, returning the body.
    pub fn into_body(self) -> serde_json::Value {
        self.body
    }
}

/// Low-level Zanox API client.
///
/// Holds immutable credentials, the API base URL and the HTTP transport.
/// Resource-specific operations are implemented via the `Fetch` and
/// `FetchByDate` traits on resource types.
///
/// This struct is cheaply cloneable; clones share the same credentials and
/// connection pool, and may be used from many tasks at once.
///
/// # Example
///
/// ```no_run
/// use zanoxapi::ZanoxClient;
///
/// # fn example() -> zanoxapi::Result<()> {
/// // Create from environment variables
/// let client = ZanoxClient::from_env()?;
///
/// // Or configure manually
/// let client = ZanoxClient::new("connect-id", "secret-key")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ZanoxClient {
    transport: Arc<dyn HttpTransport>,
    base_url: Arc<Url>,
    credentials: Credentials,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for ZanoxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZanoxClient")
            .field("base_url", &self.base_url.as_str())
            .field("connect_id", &self.credentials.connect_id())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ZanoxClient {
    /// Create a client from environment variables.
    ///
    /// Uses `ZANOX_CONNECT_ID` and `ZANOX_SECRET_KEY` for authentication and
    /// optionally `ZANOX_API_URL` for the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are not set or the URL is invalid.
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials::from_env()?;
        let base_url = env::var("ZANOX_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let transport = ReqwestTransport::new(DEFAULT_TIMEOUT)?;
        Self::with_transport(credentials, &base_url, Arc::new(transport))
    }

    /// Create a client for the public API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(connect_id: &str, secret_key: &str) -> Result<Self> {
        Self::with_base_url(connect_id, secret_key, DEFAULT_API_URL)
    }

    /// Create a client against a different API root.
    ///
    /// # Arguments
    ///
    /// * `connect_id` - Zanox connect ID
    /// * `secret_key` - Zanox secret key
    /// * `base_url` - Versioned API root (e.g., `https://api.zanox.com/json/2011-03-01`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_base_url(connect_id: &str, secret_key: &str, base_url: &str) -> Result<Self> {
        let transport = ReqwestTransport::new(DEFAULT_TIMEOUT)?;
        Self::with_transport(
            Credentials::new(connect_id, secret_key),
            base_url,
            Arc::new(transport),
        )
    }

    /// Create a client with a custom HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_transport(
        credentials: Credentials,
        base_url: &str,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)?;

        Ok(Self {
            transport,
            base_url: Arc::new(base_url),
            credentials,
            timeout: None,
        })
    }

    /// Return a clone whose requests carry a per-call timeout.
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self.clone()
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Full URL for a resource path plus filters.
    ///
    /// # Errors
    ///
    /// Returns [`ZanoxError::InvalidParam`] if `resource_path` does not start
    /// with `/`.
    pub fn resource_url(&self, resource_path: &str, params: &QueryParams) -> Result<String> {
        if !resource_path.starts_with('/') {
            return Err(ZanoxError::InvalidParam(format!(
                "resource path '{resource_path}' must start with '/'"
            )));
        }

        let root = self.base_url.as_str().trim_end_matches('/');
        Ok(build_query_url(&format!("{root}{resource_path}"), params))
    }

    /// Make an authenticated GET and parse the JSON body.
    ///
    /// `resource_path` is relative to the API root and starts with `/`
    /// (e.g. `/adspaces`); it is also the URI that gets signed.
    ///
    /// # Errors
    ///
    /// Returns [`ZanoxError::InvalidParam`] if the path does not start with
    /// `/`, a transport error if the request fails, or
    /// [`ZanoxError::MalformedResponse`] if the body is not JSON.
    #[tracing::instrument(skip(self, params), fields(filters = params.len()))]
    pub async fn fetch(&self, resource_path: &str, params: &QueryParams) -> Result<ApiResponse> {
        let url = self.resource_url(resource_path, params)?;
        let request = build_authenticated_get(&self.credentials, &url, resource_path)?
            .with_timeout(self.timeout);

        tracing::debug!(%url, "dispatching request");
        let response = self.transport.send(request).await?;
        tracing::debug!(status = response.status, "received response");

        Self::parse_response(response)
    }

    /// Parse a transport response body as JSON.
    fn parse_response(response: TransportResponse) -> Result<ApiResponse> {
        let TransportResponse { status, body } = response;

        match serde_json::from_str(&body) {
            Ok(body) => Ok(ApiResponse { status, body }),
            Err(source) => {
                tracing::warn!(status, "response body is not valid JSON");
                Err(ZanoxError::MalformedResponse {
                    status,
                    body: body.chars().take(BODY_SNIPPET_LEN).collect(),
                    source,
                })
            }
        }
    }
}
