//! Zanox publisher API client library.
//!
//! A Rust library for the Zanox publisher REST API. Every request is signed
//! with the service's HMAC scheme; each remote resource is a type that
//! implements the operation trait matching how it is addressed.
//!
//! # Quick Start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use zanoxapi::{AdSpaces, Fetch, FetchByDate, Products, QueryParams, Sales, ZanoxClient};
//!
//! #[tokio::main]
//! async fn main() -> zanoxapi::Result<()> {
//!     // Create client from environment variables
//!     let client = ZanoxClient::from_env()?;
//!
//!     // Fetch the publisher's ad spaces
//!     let adspaces = AdSpaces::fetch(&client, &QueryParams::new()).await?;
//!     println!("{}", adspaces.body);
//!
//!     // Search products with filters
//!     let params = QueryParams::new().with("q", "running shoes").with("region", "DE");
//!     let products = Products::fetch(&client, &params).await?;
//!     println!("HTTP {}", products.status);
//!
//!     // Sales for one day
//!     let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//!     let sales = Sales::fetch_for_date(&client, day, &QueryParams::new()).await?;
//!     println!("{}", sales.body);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`signing`] - nonce generation and the HMAC-SHA1 signature
//! - [`request`] - query strings and authenticated request descriptors
//! - [`transport`] - the [`HttpTransport`] seam and its `reqwest` implementation
//! - [`ZanoxClient`] - the shared signed-GET-and-parse primitive
//! - [`Fetch`] / [`FetchByDate`] - operations implemented by resource types
//!   such as [`AdSpaces`] or [`Sales`]
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `ZANOX_CONNECT_ID` (required) - Your connect ID
//! - `ZANOX_SECRET_KEY` (required) - Your secret key
//! - `ZANOX_API_URL` (optional) - API root (defaults to `https://api.zanox.com/json/2011-03-01`)

pub mod cli;
mod client;
mod error;
pub mod mcp;
pub mod request;
mod resources;
pub mod signing;
mod traits;
pub mod transport;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{ApiResponse, ZanoxClient, DEFAULT_API_URL};
pub use error::{Result, ZanoxError};
pub use request::{build_authenticated_get, build_query_url, ParamValue, QueryParams, RequestDescriptor};
pub use signing::{compute_signature, generate_nonce, Credentials};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};

// Re-export traits
pub use traits::{Fetch, FetchByDate};

// Re-export resources
pub use resources::{
    parse_date,
    // Account resources
    AccountBalances,
    AdSpaces,
    Profiles,
    // Catalog resources
    AdMedia,
    Incentives,
    Products,
    // Program resources
    ProgramApplications,
    Programs,
    // Report resources
    BasicReport,
    Leads,
    Sales,
    // Dynamic dispatch
    Resource,
};
