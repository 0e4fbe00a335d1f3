//! HTTP request handlers for the mock server.

pub mod auth;
pub mod resources;

pub use resources::*;
