//! MCP tool parameter types with JSON Schema support.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::Resource;

/// Parameters for the `fetch` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FetchParams {
    /// The resource to fetch.
    pub resource: Resource,
    /// Day to report on, as YYYY-MM-DD (required for leads and sales).
    #[serde(default)]
    pub date: Option<String>,
    /// Filters passed through to the API (scalar values only).
    #[serde(default)]
    pub params: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Parameters for the `resources` MCP tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ResourcesParams {
    /// Only describe this resource.
    #[serde(default)]
    pub resource: Option<Resource>,
}
