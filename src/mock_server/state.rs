//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Zanox API server.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A canned non-JSON (or otherwise raw) response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Body sent verbatim.
    pub body: String,
}

/// A request the server accepted for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Resource path, relative to the API root.
    pub path: String,
    /// Raw query string, if any.
    pub query: Option<String>,
    /// Nonce header value.
    pub nonce: String,
}

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Secret keys indexed by connect ID.
    pub credentials: HashMap<String, String>,

    /// JSON bodies indexed by resource path (e.g. "/adspaces").
    pub resources: HashMap<String, serde_json::Value>,

    /// Raw responses indexed by resource path; take precedence over `resources`.
    pub raw_responses: HashMap<String, RawResponse>,

    /// Nonces already used; a second request with the same nonce is rejected.
    pub seen_nonces: HashSet<String>,

    /// Requests that passed authentication, in arrival order.
    pub requests: Vec<RecordedRequest>,

    /// Maximum accepted difference between the `Date` header and now, in seconds.
    pub max_clock_skew_secs: Option<i64>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Register a connect ID / secret key pair.
    pub fn with_credentials(mut self, connect_id: &str, secret_key: &str) -> Self {
        self.credentials
            .insert(connect_id.to_string(), secret_key.to_string());
        self
    }

    /// Serve a JSON body at a resource path.
    pub fn with_resource(mut self, path: &str, body: serde_json::Value) -> Self {
        self.resources.insert(path.to_string(), body);
        self
    }

    /// Serve a raw body at a resource path.
    pub fn with_raw_response(mut self, path: &str, status: u16, body: &str) -> Self {
        self.raw_responses.insert(
            path.to_string(),
            RawResponse {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    /// Reject requests whose `Date` is further than `secs` from now.
    pub fn with_max_clock_skew(mut self, secs: i64) -> Self {
        self.max_clock_skew_secs = Some(secs);
        self
    }

    /// Look up the secret key for a connect ID.
    pub fn secret_for(&self, connect_id: &str) -> Option<&str> {
        self.credentials.get(connect_id).map(String::as_str)
    }

    /// Record a nonce; returns false if it was already used.
    pub fn consume_nonce(&mut self, nonce: &str) -> bool {
        self.seen_nonces.insert(nonce.to_string())
    }
}
