//! The seam between protocol plumbing and a concrete server.

use crate::error::McpResult;
use crate::types::{
    CallToolResult, GetPromptResult, Implementation, McpTool, Prompt, ReadResourceResult,
    Resource,
};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Trait implemented by an MCP server's domain layer.
///
/// [`McpServer`](crate::McpServer) decodes JSON-RPC and calls into this
/// trait; implementations never see raw protocol messages.
#[async_trait]
pub trait McpHandler: Send + Sync {
    /// Name and version reported during `initialize`.
    fn server_info(&self) -> Implementation;

    /// Optional usage instructions reported during `initialize`.
    fn instructions(&self) -> Option<String> {
        None
    }

    /// The tool catalog.
    fn list_tools(&self) -> Vec<McpTool>;

    /// Invoke a tool.
    ///
    /// Failures are reported inside the returned envelope, not as errors.
    async fn call_tool(&self, name: &str, arguments: JsonValue) -> CallToolResult;

    /// The resource catalog.
    fn list_resources(&self) -> Vec<Resource>;

    /// Read a resource by URI.
    async fn read_resource(&self, uri: &str) -> McpResult<ReadResourceResult>;

    /// The prompt catalog.
    fn list_prompts(&self) -> Vec<Prompt>;

    /// Expand a prompt template.
    async fn get_prompt(
        &self,
        name: &str,
        arguments: &HashMap<String, String>,
    ) -> McpResult<GetPromptResult>;
}
