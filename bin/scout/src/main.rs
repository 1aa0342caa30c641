//! Scout - Fantasy Premier League GraphQL gateway.
//!
//! # Usage
//!
//! ```bash
//! # Start with defaults (port 4000, upstream fantasy.premierleague.com)
//! scout
//!
//! # Start with environment overrides
//! FPL_BASE_URL=http://localhost:9000/api GRAPHQL_PORT=8080 scout
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::signal;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use scout_core::metrics::init_metrics;
use scout_core::ports::FantasyApi;
use scout_fpl::{FplClient, FplClientConfig};
use scout_graphql::{build_schema, serve_with_shutdown, ServerConfig};

/// Scout CLI - Fantasy Premier League GraphQL gateway.
#[derive(Parser, Debug)]
#[command(name = "scout")]
#[command(about = "Scout - GraphQL gateway over the Fantasy Premier League API")]
#[command(version)]
struct Cli {
    /// Upstream REST API base URL.
    #[arg(
        long,
        env = "FPL_BASE_URL",
        default_value = "https://fantasy.premierleague.com/api"
    )]
    base_url: String,

    /// GraphQL server host.
    #[arg(long, env = "GRAPHQL_HOST", default_value = "0.0.0.0")]
    host: String,

    /// GraphQL server port.
    #[arg(long, env = "GRAPHQL_PORT", default_value = "4000")]
    port: u16,

    /// Prometheus metrics port.
    #[arg(long, env = "METRICS_PORT", default_value = "9090")]
    metrics_port: u16,

    /// Disable the GraphiQL playground routes.
    #[arg(long)]
    no_playground: bool,

    /// Enable JSON log output.
    #[arg(long, env = "JSON_LOGS")]
    json_logs: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    // Prometheus metrics exporter (optional - failures don't crash the app)
    let metrics_enabled = match format!("0.0.0.0:{}", cli.metrics_port).parse::<std::net::SocketAddr>()
    {
        Ok(metrics_addr) => match PrometheusBuilder::new()
            .with_http_listener(metrics_addr)
            .install()
        {
            Ok(()) => {
                init_metrics();
                true
            }
            Err(e) => {
                warn!(
                    "⚠️  Failed to start metrics exporter: {}. Continuing without metrics.",
                    e
                );
                false
            }
        },
        Err(e) => {
            warn!(
                "⚠️  Invalid metrics address: {}. Continuing without metrics.",
                e
            );
            false
        }
    };

    info!("🚀 Starting Scout gateway");
    debug!(base_url = %cli.base_url, "Upstream endpoint");

    let client = FplClient::new(FplClientConfig {
        base_url: cli.base_url.clone(),
    })
    .context("Failed to build upstream client")?;
    let api: Arc<dyn FantasyApi> = Arc::new(client);

    let schema = build_schema(api.clone());

    let server_config = ServerConfig {
        host: cli.host.clone(),
        port: cli.port,
        enable_playground: !cli.no_playground,
    };

    info!("✅ Scout ready");
    info!("   ⚡ GraphQL:  http://localhost:{}/graphql", cli.port);
    if metrics_enabled {
        info!("   📊 Metrics:  http://localhost:{}/metrics", cli.metrics_port);
    } else {
        info!("   📊 Metrics:  disabled");
    }
    info!("   Press Ctrl+C to stop");

    serve_with_shutdown(schema, api, server_config, shutdown_signal())
        .await
        .context("Server error")?;

    info!("🛑 Shutdown complete");
    Ok(())
}

/// Initialize tracing subscriber.
fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .init();
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
