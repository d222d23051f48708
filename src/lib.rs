//! MCP server for Strapi CMS backends.
//!
//! Exposes a Strapi instance's content types as MCP resources
//! (`strapi://content-type/{uid}`) and its entry CRUD plus media upload as
//! MCP tools, over JSON-RPC 2.0 stdio transport, compatible with any
//! MCP-aware AI agent.
//!
//! The server is a pure translation layer: entry payloads are opaque JSON
//! passed through unmodified in both directions.

pub mod config;
pub mod handlers;
pub mod protocol;
pub mod query;
pub mod resource;
pub mod server;
pub mod strapi;
