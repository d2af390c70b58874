//! JSON relay server binary.
//!
//! Startup order: config, logging, listener, serve. The process runs
//! until Ctrl+C; there is no teardown beyond graceful shutdown.

use std::path::Path;

use tokio::net::TcpListener;

use json_relay::config::{loader, RelayConfig};
use json_relay::lifecycle::Shutdown;
use json_relay::observability::logging;
use json_relay::HttpServer;

const CONFIG_PATH: &str = "relay.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config first so the configured log level applies from the start.
    let config_path = Path::new(CONFIG_PATH);
    let config = if config_path.exists() {
        loader::load_config(config_path)?
    } else {
        RelayConfig::default()
    };

    logging::init(&config.observability.log_level);

    tracing::info!("json-relay v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        downstream_url = %config.downstream.url,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.trigger();
        }
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
