use anyhow::{Context, Result};
use std::sync::Arc;
use weather_mcp::{telemetry, Config, TransportKind, WeatherService};
use weather_mcp_protocol::McpServer;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init().context("failed to install tracing subscriber")?;

    let config = Config::from_env().context("invalid configuration")?;
    if config.is_demo() {
        tracing::warn!(
            "OPENWEATHER_API_KEY is not set; running with the demo key, lookups will likely be rejected"
        );
    }

    let service =
        WeatherService::from_config(&config).context("failed to build weather provider client")?;
    let server = McpServer::new(Arc::new(service));

    tracing::info!(
        transport = ?config.transport,
        base_url = %config.base_url,
        "Starting weather MCP server"
    );

    match config.transport {
        TransportKind::Stdio => server.run_stdio().await?,
        TransportKind::Http => {
            let addr = config.listen_addr();
            tracing::info!(%addr, "Listening for HTTP requests");
            server.serve_http(addr).await?;
        }
    }

    Ok(())
}
