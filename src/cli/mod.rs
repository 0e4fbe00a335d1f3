//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the zanoxapi binary.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::Resource;

/// Zanox publisher API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "zanoxapi", about = "Zanox publisher API CLI", version)]
pub struct Cli {
    /// Output tables as JSON (`resources`, `sign`); `fetch` always prints JSON.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Versioned API root to send requests to.
    #[arg(long, global = true, env = "ZANOX_API_URL")]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch a resource and print its JSON body.
    Fetch {
        /// The resource to fetch.
        resource: Entity,

        /// Day to report on (required for leads and sales).
        #[arg(long, value_parser = parse_cli_date)]
        date: Option<NaiveDate>,

        /// Filter as key=value; repeat for several.
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// List resources with their paths and recommended filters.
    Resources,

    /// Print the authentication headers for a request.
    Sign {
        /// Resource path to sign (e.g. /adspaces).
        uri: String,

        /// Full URL the request would target; defaults to the API root plus the path.
        #[arg(long)]
        url: Option<String>,
    },

    /// Serve the MCP tools over stdio.
    Mcp,
}

/// Resources that can be fetched.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    /// The publisher profile.
    #[value(alias = "profile")]
    Profiles,
    /// Ad spaces.
    #[value(alias = "adspace")]
    Adspaces,
    /// Banners and links.
    Admedia,
    /// Coupons and other incentives.
    Incentives,
    /// Products.
    #[value(alias = "product")]
    Products,
    /// Advertiser programs.
    Programs,
    /// Program applications.
    #[value(alias = "programapplications")]
    ProgramApplications,
    /// Account balances.
    #[value(alias = "accountbalances")]
    Balances,
    /// Basic statistics report.
    #[value(alias = "reportbasic")]
    ReportBasic,
    /// Leads for one day.
    Leads,
    /// Sales for one day.
    Sales,
}

impl From<Entity> for Resource {
    fn from(entity: Entity) -> Self {
        match entity {
            Entity::Profiles => Resource::Profiles,
            Entity::Adspaces => Resource::AdSpaces,
            Entity::Admedia => Resource::AdMedia,
            Entity::Incentives => Resource::Incentives,
            Entity::Products => Resource::Products,
            Entity::Programs => Resource::Programs,
            Entity::ProgramApplications => Resource::ProgramApplications,
            Entity::Balances => Resource::AccountBalances,
            Entity::ReportBasic => Resource::BasicReport,
            Entity::Leads => Resource::Leads,
            Entity::Sales => Resource::Sales,
        }
    }
}

/// Parse a `key=value` filter argument.
pub fn parse_param(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}

fn parse_cli_date(s: &str) -> Result<NaiveDate, String> {
    crate::parse_date(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("region=DE"),
            Ok(("region".to_string(), "DE".to_string()))
        );
        assert_eq!(
            parse_param("q=a=b"),
            Ok(("q".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_param("q="), Ok(("q".to_string(), String::new())));
        assert!(parse_param("region").is_err());
        assert!(parse_param("=DE").is_err());
    }

    #[test]
    fn test_every_entity_maps_to_distinct_resource() {
        let resources: std::collections::HashSet<Resource> = Entity::value_variants()
            .iter()
            .map(|e| Resource::from(*e))
            .collect();
        assert_eq!(resources.len(), Resource::ALL.len());
    }
}
