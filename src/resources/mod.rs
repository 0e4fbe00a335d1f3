//! Zanox API resources.
//!
//! One unit type per remote resource, each implementing [`Fetch`] or
//! [`FetchByDate`]. [`Resource`] names them all for callers that pick a
//! resource at runtime (the CLI and the MCP server).

mod account;
mod catalog;
mod programs;
mod reports;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResponse, ZanoxClient};
use crate::error::{Result, ZanoxError};
use crate::request::QueryParams;
use crate::traits::{Fetch, FetchByDate};

pub use account::*;
pub use catalog::*;
pub use programs::*;
pub use reports::*;

/// Every resource the client can fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// Publisher profile.
    Profiles,
    /// Ad spaces.
    AdSpaces,
    /// Banners and links.
    AdMedia,
    /// Coupons and other incentives.
    Incentives,
    /// Products.
    Products,
    /// Advertiser programs.
    Programs,
    /// Program applications.
    ProgramApplications,
    /// Account balances.
    AccountBalances,
    /// Basic statistics report.
    #[serde(rename = "reportbasic")]
    BasicReport,
    /// Leads for one day (requires a date).
    Leads,
    /// Sales for one day (requires a date).
    Sales,
}

impl Resource {
    /// All resources, in catalogue order.
    pub const ALL: [Resource; 11] = [
        Resource::Profiles,
        Resource::AdSpaces,
        Resource::AdMedia,
        Resource::Incentives,
        Resource::Products,
        Resource::Programs,
        Resource::ProgramApplications,
        Resource::AccountBalances,
        Resource::BasicReport,
        Resource::Leads,
        Resource::Sales,
    ];

    /// Stable lowercase name, as used by serde and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Self::Profiles => "profiles",
            Self::AdSpaces => "adspaces",
            Self::AdMedia => "admedia",
            Self::Incentives => "incentives",
            Self::Products => "products",
            Self::Programs => "programs",
            Self::ProgramApplications => "programapplications",
            Self::AccountBalances => "accountbalances",
            Self::BasicReport => "reportbasic",
            Self::Leads => "leads",
            Self::Sales => "sales",
        }
    }

    /// Path relative to the API root; date-scoped resources take the date
    /// as a further segment.
    pub fn path(self) -> &'static str {
        match self {
            Self::Profiles => Profiles::PATH,
            Self::AdSpaces => AdSpaces::PATH,
            Self::AdMedia => AdMedia::PATH,
            Self::Incentives => Incentives::PATH,
            Self::Products => Products::PATH,
            Self::Programs => Programs::PATH,
            Self::ProgramApplications => ProgramApplications::PATH,
            Self::AccountBalances => AccountBalances::PATH,
            Self::BasicReport => BasicReport::PATH,
            Self::Leads => <Leads as FetchByDate>::PATH,
            Self::Sales => <Sales as FetchByDate>::PATH,
        }
    }

    /// Recommended filter keys.
    pub fn filters(self) -> &'static [&'static str] {
        match self {
            Self::Profiles => Profiles::FILTERS,
            Self::AdSpaces => AdSpaces::FILTERS,
            Self::AdMedia => AdMedia::FILTERS,
            Self::Incentives => Incentives::FILTERS,
            Self::Products => Products::FILTERS,
            Self::Programs => Programs::FILTERS,
            Self::ProgramApplications => ProgramApplications::FILTERS,
            Self::AccountBalances => AccountBalances::FILTERS,
            Self::BasicReport => BasicReport::FILTERS,
            Self::Leads => <Leads as FetchByDate>::FILTERS,
            Self::Sales => <Sales as FetchByDate>::FILTERS,
        }
    }

    /// Whether the resource is addressed by a `YYYY-MM-DD` date.
    pub fn is_date_scoped(self) -> bool {
        matches!(self, Self::Leads | Self::Sales)
    }

    /// Fetch this resource.
    ///
    /// # Errors
    ///
    /// Returns [`ZanoxError::MissingDate`] if a date-scoped resource has no
    /// date, [`ZanoxError::InvalidParam`] if a date is given to any other
    /// resource, and otherwise whatever the request itself returns.
    pub async fn fetch(
        self,
        client: &ZanoxClient,
        date: Option<NaiveDate>,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        match (self, date) {
            (Self::Leads, Some(day)) => Leads::fetch_for_date(client, day, params).await,
            (Self::Sales, Some(day)) => Sales::fetch_for_date(client, day, params).await,
            (Self::Leads | Self::Sales, None) => Err(ZanoxError::MissingDate(self.name())),
            (_, Some(_)) => Err(ZanoxError::InvalidParam(format!(
                "resource '{}' does not take a date",
                self.name()
            ))),
            (Self::Profiles, None) => Profiles::fetch(client, params).await,
            (Self::AdSpaces, None) => AdSpaces::fetch(client, params).await,
            (Self::AdMedia, None) => AdMedia::fetch(client, params).await,
            (Self::Incentives, None) => Incentives::fetch(client, params).await,
            (Self::Products, None) => Products::fetch(client, params).await,
            (Self::Programs, None) => Programs::fetch(client, params).await,
            (Self::ProgramApplications, None) => ProgramApplications::fetch(client, params).await,
            (Self::AccountBalances, None) => AccountBalances::fetch(client, params).await,
            (Self::BasicReport, None) => BasicReport::fetch(client, params).await,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = ZanoxError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "profile" | "profiles" => Ok(Self::Profiles),
            "adspace" | "adspaces" => Ok(Self::AdSpaces),
            "admedia" => Ok(Self::AdMedia),
            "incentive" | "incentives" => Ok(Self::Incentives),
            "product" | "products" => Ok(Self::Products),
            "program" | "programs" => Ok(Self::Programs),
            "programapplication" | "programapplications" => Ok(Self::ProgramApplications),
            "balances" | "accountbalances" => Ok(Self::AccountBalances),
            "reportbasic" | "basicreport" => Ok(Self::BasicReport),
            "lead" | "leads" => Ok(Self::Leads),
            "sale" | "sales" => Ok(Self::Sales),
            _ => Err(ZanoxError::InvalidParam(format!("unknown resource '{s}'"))),
        }
    }
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`ZanoxError::InvalidDate`] for anything else.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ZanoxError::InvalidDate(s.to_string()))
}
