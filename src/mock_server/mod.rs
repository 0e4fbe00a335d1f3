//! Mock Zanox API server for E2E testing.
//!
//! This module provides an in-memory server that behaves like the Zanox
//! publisher API where it matters to this client: it recomputes every
//! request signature, rejects reused nonces, and serves fixture bodies per
//! resource path. Unlike wiremock, which matches requests per-test, the
//! server keeps state across requests, so replay and concurrency scenarios
//! can be exercised end to end.
//!
//! # Example
//!
//! ```ignore
//! use zanoxapi::mock_server::{MockServer, CONNECT_ID, SECRET_KEY};
//! use zanoxapi::{AdSpaces, Fetch, QueryParams, ZanoxClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = ZanoxClient::with_base_url(CONNECT_ID, SECRET_KEY, server.url()).unwrap();
//!
//!     let response = AdSpaces::fetch(&client, &QueryParams::new()).await.unwrap();
//!     assert_eq!(response.status, 200);
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{Fixtures, CONNECT_ID, REPORT_DATE, SECRET_KEY};
pub use handlers::auth::AuthFailure;
pub use server::MockServer;
pub use state::{MockState, RawResponse, RecordedRequest};
