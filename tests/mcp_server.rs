//! Tests for the MCP server implementation.

use rmcp::handler::server::ServerHandler;
use zanoxapi::mcp::{FetchParams, ResourcesParams, ZanoxServer};
use zanoxapi::{Resource, ZanoxClient};

#[test]
fn zanox_server_implements_server_handler() {
    fn assert_server_handler<T: ServerHandler + Clone + Send + Sync + 'static>() {}
    assert_server_handler::<ZanoxServer>();
}

#[test]
fn get_info_advertises_tools() {
    let client = ZanoxClient::new("cid", "secret").unwrap();
    let info = ZanoxServer::new(client).get_info();

    assert_eq!(info.server_info.name, "zanoxapi");
    assert!(info.capabilities.tools.is_some());
    assert!(info.instructions.unwrap().contains("Zanox"));
}

#[test]
fn fetch_params_deserialize_from_tool_arguments() {
    let params: FetchParams = serde_json::from_value(serde_json::json!({
        "resource": "reportbasic",
        "params": {"fromdate": "2024-01-01", "todate": "2024-01-31", "groupby": "day"}
    }))
    .unwrap();

    assert_eq!(params.resource, Resource::BasicReport);
    assert!(params.date.is_none());
    assert_eq!(params.params.unwrap().len(), 3);
}

#[test]
fn unknown_resource_is_rejected() {
    let result: Result<FetchParams, _> =
        serde_json::from_value(serde_json::json!({"resource": "vouchers"}));
    assert!(result.is_err());
}

#[test]
fn resources_params_default_lists_all() {
    let params = ResourcesParams::default();
    assert!(params.resource.is_none());
}
