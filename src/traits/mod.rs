//! Trait definitions for Zanox operations.
//!
//! Each resource type implements the trait matching how it is addressed;
//! the request itself is shared.

mod fetch;
mod fetch_by_date;

pub use fetch::Fetch;
pub use fetch_by_date::FetchByDate;
