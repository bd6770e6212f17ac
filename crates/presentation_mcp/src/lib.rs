//! Skycast tool server
//!
//! Exposes the forecast use case as MCP tools over line-delimited
//! JSON-RPC 2.0 on stdin/stdout.

pub mod protocol;
pub mod server;
pub mod tools;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use server::{McpServer, ServeError};
pub use tools::{ToolCallError, ToolResult, WeatherTools, parse_location_query};
