//! Zanox API CLI binary.
//!
//! A command-line interface for the Zanox publisher API.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use rmcp::ServiceExt;
use serde::Serialize;
use tabled::{Table, Tabled};
use zanoxapi::cli::{Cli, Command};
use zanoxapi::mcp::ZanoxServer;
use zanoxapi::transport::{ReqwestTransport, DEFAULT_TIMEOUT};
use zanoxapi::{
    build_authenticated_get, Credentials, QueryParams, Resource, ZanoxClient, DEFAULT_API_URL,
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // The catalogue is static; no credentials needed.
    if matches!(cli.command, Command::Resources) {
        return match handle_resources(cli.json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let client = match build_client(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set ZANOX_CONNECT_ID and ZANOX_SECRET_KEY environment variables");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_client(cli: &Cli) -> zanoxapi::Result<ZanoxClient> {
    let credentials = Credentials::from_env()?;
    let base_url = cli.api_url.as_deref().unwrap_or(DEFAULT_API_URL);
    let transport = ReqwestTransport::new(DEFAULT_TIMEOUT)?;

    let client = ZanoxClient::with_transport(credentials, base_url, Arc::new(transport))?;
    Ok(match cli.timeout {
        Some(secs) => client.with_timeout(Duration::from_secs(secs)),
        None => client,
    })
}

async fn run(client: &ZanoxClient, cli: Cli) -> zanoxapi::Result<ExitCode> {
    match cli.command {
        Command::Fetch {
            resource,
            date,
            params,
        } => handle_fetch(client, resource.into(), date, params).await,
        Command::Resources => {
            handle_resources(cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Sign { uri, url } => {
            handle_sign(client, &uri, url.as_deref(), cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Mcp => handle_mcp(client.clone()).await,
    }
}

async fn handle_fetch(
    client: &ZanoxClient,
    resource: Resource,
    date: Option<chrono::NaiveDate>,
    params: Vec<(String, String)>,
) -> zanoxapi::Result<ExitCode> {
    let params: QueryParams = params.into_iter().collect();
    let response = resource.fetch(client, date, &params).await?;

    println!("{}", serde_json::to_string_pretty(&response.body)?);

    if response.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("Error: {resource} returned HTTP {}", response.status);
        Ok(ExitCode::FAILURE)
    }
}

fn handle_resources(json: bool) -> zanoxapi::Result<()> {
    let rows: Vec<ResourceRow> = Resource::ALL.into_iter().map(ResourceRow::from).collect();
    output_rows(&rows, json)
}

fn handle_sign(
    client: &ZanoxClient,
    uri: &str,
    url: Option<&str>,
    json: bool,
) -> zanoxapi::Result<()> {
    // Validates the path even when an explicit URL is given.
    let default_url = client.resource_url(uri, &QueryParams::new())?;
    let url = url.map_or(default_url, str::to_string);
    let request = build_authenticated_get(client.credentials(), &url, uri)?;

    let rows = vec![
        HeaderRow::new("URL", &request.url),
        HeaderRow::new("Authorization", request.authorization().unwrap_or_default()),
        HeaderRow::new("Date", request.date().unwrap_or_default()),
        HeaderRow::new("nonce", request.nonce().unwrap_or_default()),
    ];
    output_rows(&rows, json)
}

async fn handle_mcp(client: ZanoxClient) -> zanoxapi::Result<ExitCode> {
    let service = match ZanoxServer::new(client)
        .serve(rmcp::transport::stdio())
        .await
    {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: failed to start MCP server: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Err(e) = service.waiting().await {
        eprintln!("Error: MCP server stopped: {e}");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn output_rows<R: Tabled + Serialize>(rows: &[R], json: bool) -> zanoxapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        println!("{}", Table::new(rows));
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled, Serialize)]
struct ResourceRow {
    resource: String,
    path: String,
    date: String,
    filters: String,
}

impl From<Resource> for ResourceRow {
    fn from(r: Resource) -> Self {
        Self {
            resource: r.name().to_string(),
            path: if r.is_date_scoped() {
                format!("{}/{{date}}", r.path())
            } else {
                r.path().to_string()
            },
            date: if r.is_date_scoped() { "required" } else { "-" }.to_string(),
            filters: r.filters().join(", "),
        }
    }
}

#[derive(Tabled, Serialize)]
struct HeaderRow {
    header: String,
    value: String,
}

impl HeaderRow {
    fn new(header: &str, value: &str) -> Self {
        Self {
            header: header.to_string(),
            value: value.to_string(),
        }
    }
}
