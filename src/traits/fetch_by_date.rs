//! FetchByDate trait for report resources scoped to a single day.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::client::{ApiResponse, ZanoxClient};
use crate::error::Result;
use crate::request::QueryParams;

/// Fetch a resource whose path ends in a `YYYY-MM-DD` date segment.
///
/// # Example
///
/// ```ignore
/// use chrono::NaiveDate;
/// use zanoxapi::{FetchByDate, QueryParams, Sales, ZanoxClient};
///
/// let client = ZanoxClient::from_env()?;
/// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let sales = Sales::fetch_for_date(&client, day, &QueryParams::new()).await?;
/// ```
#[async_trait]
pub trait FetchByDate {
    /// Path prefix the date is appended to (e.g. `/reports/sales/date`).
    const PATH: &'static str;

    /// Filter keys the service documents for this resource.
    const FILTERS: &'static [&'static str];

    /// Full resource path for a given day.
    fn path_for(date: NaiveDate) -> String {
        format!("{}/{}", Self::PATH, date.format("%Y-%m-%d"))
    }

    /// Fetch the resource for `date` with the given filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    async fn fetch_for_date(
        client: &ZanoxClient,
        date: NaiveDate,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        client.fetch(&Self::path_for(date), params).await
    }
}
