//! Paper Reader MCP server.
//!
//! Newline-delimited JSON-RPC 2.0 over stdio, exposing the paper-reading
//! tools from `paper_reader_tools`.

pub mod cli;
pub mod config;
pub mod protocol;
pub mod server;

pub use cli::{CliArgs, CliCommand};
pub use config::{Config, ServerInfo};
pub use server::McpServer;
