//! MCP server implementation.
//!
//! [`McpServer`] turns JSON-RPC messages into calls on an [`McpHandler`]
//! and builds the responses. It holds no per-session state, so one server
//! can answer any number of interleaved requests.

use crate::error::McpError;
use crate::handler::McpHandler;
use crate::types::{
    CallToolParams, GetPromptParams, InitializeParams, InitializeResult, JsonRpcError,
    JsonRpcMessage, JsonRpcRequest, JsonRpcResponse, ListPromptsResult, ListResourcesResult,
    ListToolsResult, ReadResourceParams, ServerCapabilities, DEFAULT_PROTOCOL_VERSION,
};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::debug;

/// MCP server routing JSON-RPC methods to a handler.
///
/// # Example
///
/// ```ignore
/// use weather_mcp_protocol::McpServer;
///
/// let server = McpServer::new(Arc::new(my_handler));
/// server.run_stdio().await?;
/// ```
#[derive(Clone)]
pub struct McpServer {
    handler: Arc<dyn McpHandler>,
    capabilities: ServerCapabilities,
}

impl McpServer {
    /// Create a new server around a handler.
    pub fn new(handler: Arc<dyn McpHandler>) -> Self {
        Self {
            handler,
            capabilities: ServerCapabilities::static_catalogs(),
        }
    }

    /// Handle one raw JSON-RPC message.
    ///
    /// Returns `None` for notifications, which never get a response. Input
    /// that is not JSON gets a parse error; JSON that is not a valid message,
    /// including an `id` that is neither an integer nor a string, gets an
    /// invalid-request error. Both are answered with id `0`.
    pub async fn handle_message(&self, message: &str) -> Option<JsonRpcResponse> {
        let value: JsonValue = match serde_json::from_str(message) {
            Ok(v) => v,
            Err(e) => return Some(parse_error(e)),
        };

        if let Some(id) = value.get("id") {
            if !(id.is_i64() || id.is_string()) {
                return Some(JsonRpcResponse::error(
                    0,
                    JsonRpcError::INVALID_REQUEST,
                    "Invalid request: id must be an integer or a string",
                ));
            }
        }

        let message: JsonRpcMessage = match serde_json::from_value(value) {
            Ok(m) => m,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    0,
                    JsonRpcError::INVALID_REQUEST,
                    format!("Invalid request: {}", e),
                ));
            }
        };

        match message {
            JsonRpcMessage::Notification(notification) => {
                debug!(method = %notification.method, "Ignoring notification");
                None
            }
            JsonRpcMessage::Request(request) => Some(self.handle_request(request).await),
        }
    }

    /// Handle a decoded request.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!(method = %request.method, id = %request.id, "Handling request");

        let id = request.id.clone();
        match self.dispatch(request).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => {
                debug!(id = %id, error = %e, "Request failed");
                JsonRpcResponse::error(id, e.code(), e.to_string())
            }
        }
    }

    async fn dispatch(&self, request: JsonRpcRequest) -> Result<JsonValue, McpError> {
        match request.method.as_str() {
            "initialize" => {
                let params: InitializeParams = match request.params {
                    Some(p) => serde_json::from_value(p)
                        .map_err(|e| McpError::invalid_params(e.to_string()))?,
                    None => InitializeParams::default(),
                };
                if let Some(client) = &params.client_info {
                    debug!(client = %client.name, version = %client.version, "Client connected");
                }
                let result = InitializeResult {
                    protocol_version: params
                        .protocol_version
                        .filter(|v| !v.is_empty())
                        .unwrap_or_else(|| DEFAULT_PROTOCOL_VERSION.to_string()),
                    capabilities: self.capabilities.clone(),
                    server_info: self.handler.server_info(),
                    instructions: self.handler.instructions(),
                };
                to_value(result)
            }
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => to_value(ListToolsResult {
                tools: self.handler.list_tools(),
                next_cursor: None,
            }),
            "tools/call" => {
                let params: CallToolParams = required_params(request.params)?;
                let result = self.handler.call_tool(&params.name, params.arguments).await;
                to_value(result)
            }
            "resources/list" => to_value(ListResourcesResult {
                resources: self.handler.list_resources(),
                next_cursor: None,
            }),
            "resources/read" => {
                let params: ReadResourceParams = required_params(request.params)?;
                let result = self.handler.read_resource(&params.uri).await?;
                to_value(result)
            }
            "prompts/list" => to_value(ListPromptsResult {
                prompts: self.handler.list_prompts(),
                next_cursor: None,
            }),
            "prompts/get" => {
                let params: GetPromptParams = required_params(request.params)?;
                let result = self
                    .handler
                    .get_prompt(&params.name, &params.arguments)
                    .await?;
                to_value(result)
            }
            other => Err(McpError::MethodNotFound(other.to_string())),
        }
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer")
            .field("server_info", &self.handler.server_info())
            .finish()
    }
}

/// Response to input that could not be decoded at all.
pub(crate) fn parse_error(err: impl std::fmt::Display) -> JsonRpcResponse {
    JsonRpcResponse::error(0, JsonRpcError::PARSE_ERROR, format!("Parse error: {}", err))
}

fn required_params<T: DeserializeOwned>(params: Option<JsonValue>) -> Result<T, McpError> {
    let params = params.ok_or_else(|| McpError::invalid_params("Missing params"))?;
    serde_json::from_value(params).map_err(|e| McpError::invalid_params(e.to_string()))
}

fn to_value(value: impl serde::Serialize) -> Result<JsonValue, McpError> {
    Ok(serde_json::to_value(value)?)
}
