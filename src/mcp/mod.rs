//! MCP (Model Context Protocol) server and tool types.
//!
//! This module provides an MCP server for the Zanox API, allowing AI
//! assistants to fetch publisher data through the same signed requests the
//! library makes.
//!
//! # Example
//!
//! ```no_run
//! use zanoxapi::mcp::ZanoxServer;
//!
//! # fn main() -> zanoxapi::Result<()> {
//! let server = ZanoxServer::from_env()?;
//! // Server can now be used with rmcp transport
//! # Ok(())
//! # }
//! ```

mod params;
mod server;

pub use params::*;
pub use server::ZanoxServer;
