//! MCP transports.
//!
//! Two ways to reach an [`McpServer`]: newline-delimited JSON-RPC over
//! stdio, and JSON-RPC over HTTP `POST /mcp`.

use crate::error::{McpError, McpResult};
use crate::server::{parse_error, McpServer};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

impl McpServer {
    /// Run the server on stdio.
    ///
    /// Returns when stdin reaches EOF.
    pub async fn run_stdio(&self) -> McpResult<()> {
        info!("Serving MCP over stdio");
        let reader = BufReader::new(tokio::io::stdin());
        self.serve_lines(reader, tokio::io::stdout()).await
    }

    /// Serve newline-delimited JSON-RPC from `reader`, answering on `writer`.
    ///
    /// A line that is not valid UTF-8 is answered with a parse error and
    /// the loop carries on; only I/O failures on the streams end it.
    pub async fn serve_lines<R, W>(&self, mut reader: R, mut writer: W) -> McpResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break; // EOF
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.handle_message(trimmed).await
                }
                Err(e) => {
                    warn!(error = %e, "Discarding line that is not valid UTF-8");
                    Some(parse_error(e))
                }
            };

            if let Some(resp) = response {
                let json = serde_json::to_string(&resp)?;
                writer.write_all(json.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }

        debug!("Input closed, stopping");
        Ok(())
    }

    /// Create an Axum router exposing the server over HTTP.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/mcp", post(handle_rpc))
            .route("/health", get(health_check))
            .with_state(self.clone())
    }

    /// Start serving HTTP on the given address.
    ///
    /// A bind failure is reported as [`McpError::Bind`].
    pub async fn serve_http(&self, addr: impl Into<SocketAddr>) -> McpResult<()> {
        let addr = addr.into();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| McpError::Bind(format!("{}: {}", addr, e)))?;

        info!(%addr, "Serving MCP over HTTP");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| McpError::Transport(e.to_string()))
    }
}

/// POST /mcp - one JSON-RPC message per request
async fn handle_rpc(State(server): State<McpServer>, body: String) -> Response {
    match server.handle_message(&body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// GET /health - liveness check
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
