//! # weather-mcp-protocol
//!
//! Model Context Protocol (MCP) server plumbing.
//!
//! MCP is a JSON-RPC 2.0 protocol through which AI-agent hosts discover and
//! call tools, read resources and expand prompt templates. This crate knows
//! nothing about weather; it decodes requests, calls an [`McpHandler`] and
//! encodes the answers.
//!
//! ## Core Concepts
//!
//! - **[`McpHandler`]**: the domain side of a server (catalogs, tool calls)
//! - **[`McpServer`]**: routes JSON-RPC methods to the handler
//! - **Transports**: [`McpServer::run_stdio`] and [`McpServer::serve_http`]
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use weather_mcp_protocol::McpServer;
//!
//! let server = McpServer::new(Arc::new(my_handler));
//! server.run_stdio().await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod handler;
pub mod server;
pub mod transport;
pub mod types;

// Re-exports
pub use error::{McpError, McpResult};
pub use handler::McpHandler;
pub use server::McpServer;
pub use types::{
    CallToolParams, CallToolResult, GetPromptParams, GetPromptResult, Implementation,
    InitializeParams, InitializeResult, JsonRpcError, JsonRpcMessage, JsonRpcNotification,
    JsonRpcRequest, JsonRpcResponse, ListPromptsResult, ListResourcesResult, ListToolsResult,
    McpTool, Prompt, PromptArgument, PromptMessage, PromptMessageContent, ReadResourceParams,
    ReadResourceResult, RequestId, Resource, ResourceContent, ServerCapabilities,
    ToolResultContent,
};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        CallToolResult, McpError, McpHandler, McpResult, McpServer, McpTool, Prompt, Resource,
    };
}
