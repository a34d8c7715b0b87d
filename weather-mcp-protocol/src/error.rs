//! MCP error types.

use crate::types::JsonRpcError;
use thiserror::Error;

/// MCP errors.
#[derive(Debug, Error)]
pub enum McpError {
    /// Transport error.
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown JSON-RPC method.
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// Missing or malformed request parameters.
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Resource not found.
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// Prompt not found.
    #[error("Prompt not found: {0}")]
    PromptNotFound(String),

    /// Failed to bind the listening socket.
    #[error("Failed to bind to address: {0}")]
    Bind(String),
}

impl McpError {
    /// Create an invalid params error.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams(message.into())
    }

    /// JSON-RPC error code used when this error answers a request.
    pub fn code(&self) -> i32 {
        match self {
            Self::Json(_) => JsonRpcError::PARSE_ERROR,
            Self::MethodNotFound(_) => JsonRpcError::METHOD_NOT_FOUND,
            Self::InvalidParams(_) | Self::ResourceNotFound(_) | Self::PromptNotFound(_) => {
                JsonRpcError::INVALID_PARAMS
            }
            Self::Transport(_) | Self::Io(_) | Self::Bind(_) => JsonRpcError::INTERNAL_ERROR,
        }
    }
}

/// Result type for MCP operations.
pub type McpResult<T> = Result<T, McpError>;
