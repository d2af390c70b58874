//! HTTP server setup and the relay handler.
//!
//! # Responsibilities
//! - Create Axum Router with the single relay route
//! - Wire up middleware (request tracing)
//! - Bind server to listener, serve until shutdown
//! - Forward decoded payloads to the downstream endpoint

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;
use url::Url;

use crate::config::RelayConfig;
use crate::http::error::RelayError;

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    /// Outbound client, shared across requests. No timeout is
    /// configured: a hanging downstream stalls that request.
    pub client: reqwest::Client,
    pub downstream_url: Url,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let state = AppState {
            client: reqwest::Client::new(),
            downstream_url: config.downstream.url,
        };

        let router = Router::new()
            .route("/", post(relay_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        Self { router }
    }

    /// Run the server, accepting connections on the given listener
    /// until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Relay handler.
///
/// Decodes the body as UTF-8 JSON, forwards the decoded payload as
/// form data to the downstream endpoint, logs the downstream response
/// text, and returns that text verbatim with status 200. The
/// downstream status code is logged but never propagated.
async fn relay_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, RelayError> {
    let text = std::str::from_utf8(&body)?;
    let payload: serde_json::Value = serde_json::from_str(text)?;

    // The payload is opaque: re-encoded as the client's default form
    // representation of the mapping, never inspected.
    let response = state
        .client
        .post(state.downstream_url.clone())
        .form(&payload)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    tracing::info!(status = %status, body = %body, "Downstream response");

    Ok(body.into_response())
}
