//! MCP Server handler for the Zanox API.

use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, ErrorData as McpError, Implementation,
        ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
        ToolsCapability,
    },
    service::RequestContext,
    RoleServer,
};
use schemars::JsonSchema;
use std::sync::Arc;

use crate::{
    mcp::{FetchParams, ResourcesParams},
    parse_date, QueryParams, Resource, ZanoxClient, ZanoxError,
};

/// Zanox MCP Server.
///
/// Implements the MCP ServerHandler trait, providing tools to query the
/// Zanox publisher API through the Model Context Protocol.
///
/// # Tools
///
/// - `fetch` - Fetch one resource with optional filters
/// - `resources` - Describe the available resources and their filters
#[derive(Clone)]
pub struct ZanoxServer {
    client: Arc<ZanoxClient>,
}

impl ZanoxServer {
    /// Create a new ZanoxServer from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `ZANOX_CONNECT_ID` or `ZANOX_SECRET_KEY` is not set.
    pub fn from_env() -> crate::Result<Self> {
        let client = ZanoxClient::from_env()?;
        Ok(Self::new(client))
    }

    /// Create a new ZanoxServer with an existing client.
    pub fn new(client: ZanoxClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Generate JSON Schema for a type.
    fn schema<T: JsonSchema>() -> Arc<serde_json::Map<String, serde_json::Value>> {
        let schema = schemars::schema_for!(T);
        let value = serde_json::to_value(&schema).unwrap_or(serde_json::json!({}));
        match value {
            serde_json::Value::Object(map) => Arc::new(map),
            _ => Arc::new(serde_json::Map::new()),
        }
    }

    /// Convert ZanoxError to McpError.
    fn to_mcp_error(err: ZanoxError) -> McpError {
        match &err {
            ZanoxError::InvalidDate(_)
            | ZanoxError::InvalidParam(_)
            | ZanoxError::MissingDate(_) => McpError::invalid_params(err.to_string(), None),
            ZanoxError::ConfigMissing(msg) => McpError::invalid_params(msg.clone(), None),
            _ => McpError::internal_error(err.to_string(), None),
        }
    }

    fn json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Handle the `fetch` tool.
    ///
    /// Returns `{"status": ..., "body": ...}` as pretty-printed JSON. A
    /// non-2xx status is still a successful tool call; the body carries the
    /// service's error.
    ///
    /// # Errors
    ///
    /// Returns an MCP error if:
    /// - The date is malformed, missing for leads/sales, or given elsewhere
    /// - A filter value is not a scalar
    /// - The request fails or the response is not JSON
    pub async fn handle_fetch(&self, params: FetchParams) -> Result<CallToolResult, McpError> {
        let date = params
            .date
            .as_deref()
            .map(parse_date)
            .transpose()
            .map_err(Self::to_mcp_error)?;

        let filters = match params.params {
            Some(map) => QueryParams::try_from(map).map_err(Self::to_mcp_error)?,
            None => QueryParams::new(),
        };

        let response = params
            .resource
            .fetch(&self.client, date, &filters)
            .await
            .map_err(Self::to_mcp_error)?;

        Self::json_result(&response)
    }

    /// Handle the `resources` tool.
    pub fn handle_resources(&self, params: ResourcesParams) -> Result<CallToolResult, McpError> {
        let catalogue: Vec<serde_json::Value> = Resource::ALL
            .into_iter()
            .filter(|r| params.resource.map_or(true, |only| only == *r))
            .map(|r| {
                serde_json::json!({
                    "resource": r.name(),
                    "path": r.path(),
                    "requires_date": r.is_date_scoped(),
                    "filters": r.filters(),
                })
            })
            .collect();

        Self::json_result(&catalogue)
    }
}

impl ServerHandler for ZanoxServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "zanoxapi".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "Zanox publisher API MCP Server - Query profiles, ad spaces, programs, \
                 products, incentives, balances and reports."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: PaginatedRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = vec![
            Tool::new(
                "fetch",
                "Fetch a Zanox resource. \
                 Leads and sales require date (YYYY-MM-DD). \
                 params holds filters such as region, program, items, page; \
                 use the resources tool to see the recommended filters.",
                Self::schema::<FetchParams>(),
            ),
            Tool::new(
                "resources",
                "List Zanox resources with their paths and recommended filters.",
                Self::schema::<ResourcesParams>(),
            ),
        ];

        Ok(ListToolsResult {
            tools,
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request
            .arguments
            .map(serde_json::Value::Object)
            .unwrap_or(serde_json::json!({}));

        match request.name.as_ref() {
            "fetch" => {
                let params: FetchParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_fetch(params).await
            }
            "resources" => {
                let params: ResourcesParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_resources(params)
            }
            other => Err(McpError::invalid_params(
                format!("Unknown tool: {other}"),
                None,
            )),
        }
    }
}
