//! Fetch trait for resources addressed by a fixed path.

use async_trait::async_trait;

use crate::client::{ApiResponse, ZanoxClient};
use crate::error::Result;
use crate::request::QueryParams;

/// Fetch a resource that lives at a fixed path.
///
/// Implementors only name their path and recommended filters; the request
/// itself is the shared signed GET.
///
/// # Example
///
/// ```ignore
/// use zanoxapi::{AdMedia, Fetch, QueryParams, ZanoxClient};
///
/// let client = ZanoxClient::from_env()?;
/// let params = QueryParams::new().with("program", 1234).with("items", 10);
/// let admedia = AdMedia::fetch(&client, &params).await?;
/// ```
#[async_trait]
pub trait Fetch {
    /// Resource path relative to the API root (e.g. `/adspaces`).
    const PATH: &'static str;

    /// Filter keys the service documents for this resource.
    ///
    /// Informational only; any key is passed through.
    const FILTERS: &'static [&'static str];

    /// Fetch the resource with the given filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    async fn fetch(client: &ZanoxClient, params: &QueryParams) -> Result<ApiResponse> {
        client.fetch(Self::PATH, params).await
    }
}
