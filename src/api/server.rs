//! API server lifecycle: starts/stops the axum HTTP server.
//!
//! bind → spawn background task → return handle with shutdown channel.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::header::InvalidHeaderValue;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::api::router::{build_router, cors_layer};
use crate::api::types::ApiContext;
use crate::catalog::ParameterCatalog;
use crate::config::ServerConfig;

// ═══════════════════════════════════════════════════════════
// Public types
// ═══════════════════════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(#[from] InvalidHeaderValue),
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to get server address: {0}")]
    LocalAddr(std::io::Error),
}

/// Session metadata for a running server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSession {
    pub session_id: String,
    pub server_addr: String,
    pub port: u16,
    pub started_at: String,
}

/// Handle to a running API server.
pub struct ApiServer {
    pub session: ServerSession,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ApiServer {
    /// Signal a graceful shutdown. In-flight requests complete.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("API server shutdown signal sent");
        }
    }

    /// Wait for the server task to finish.
    pub async fn wait(self) {
        if let Err(e) = self.task.await {
            tracing::error!("API server task failed: {e}");
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Server lifecycle
// ═══════════════════════════════════════════════════════════

/// Start the API server on `config.bind_addr` with the given catalog.
///
/// Port 0 binds an ephemeral port; the actual address is reported in
/// the returned session.
pub async fn start_server(
    config: &ServerConfig,
    catalog: Arc<ParameterCatalog>,
) -> Result<ApiServer, ServerError> {
    // 1. Validate CORS origins before touching the network
    let cors = cors_layer(&config.allowed_origins)?;

    // 2. Bind
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr,
            source,
        })?;

    let addr = listener.local_addr().map_err(ServerError::LocalAddr)?;

    tracing::info!(%addr, parameters = catalog.len(), "API server binding");

    // 3. Build the router
    let ctx = ApiContext::new(catalog, config.extraction);
    let app = build_router(ctx, cors, config.max_body_bytes);

    // 4. Create session metadata
    let session = ServerSession {
        session_id: Uuid::new_v4().to_string(),
        server_addr: addr.to_string(),
        port: addr.port(),
        started_at: chrono::Utc::now().to_rfc3339(),
    };

    // 5. Set up shutdown signal
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    // 6. Spawn server in background task
    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("API server received shutdown signal");
        };

        tracing::info!(%addr, "API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("API server error: {e}");
        }

        tracing::info!("API server stopped");
    });

    Ok(ApiServer {
        session,
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn ephemeral_config() -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            ..ServerConfig::default()
        }
    }

    async fn start_test_server() -> ApiServer {
        start_server(&ephemeral_config(), ParameterCatalog::builtin())
            .await
            .expect("server should start")
    }

    #[tokio::test]
    async fn start_and_stop_server() {
        let mut server = start_test_server().await;

        assert!(!server.session.session_id.is_empty());
        assert!(server.session.port > 0);

        let url = format!("http://127.0.0.1:{}/api/health", server.session.port);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        server.shutdown();
        server.wait().await;
    }

    #[tokio::test]
    async fn server_session_has_valid_metadata() {
        let mut server = start_test_server().await;

        assert!(!server.session.started_at.is_empty());
        assert!(server.session.server_addr.contains(':'));

        server.shutdown();
    }

    #[tokio::test]
    async fn server_serves_analyze() {
        let mut server = start_test_server().await;
        let port = server.session.port;

        let client = reqwest::Client::new();
        let resp = client
            .post(format!("http://127.0.0.1:{port}/api/analyze"))
            .json(&serde_json::json!({ "text": "TSH 6.2 mIU/L" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let json: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(json["parsed_results"]["TSH"]["classification"], "above");

        // Unknown route returns 404
        let resp = reqwest::get(format!("http://127.0.0.1:{port}/nonexistent"))
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

        server.shutdown();
        server.wait().await;
    }

    #[tokio::test]
    async fn server_serves_multipart_upload() {
        let mut server = start_test_server().await;
        let port = server.session.port;

        let form = reqwest::multipart::Form::new()
            .text("user_gender", "male")
            .part(
                "file",
                reqwest::multipart::Part::bytes(b"Hemoglobin 15.0".to_vec()).file_name("r.txt"),
            );
        let resp = reqwest::Client::new()
            .post(format!("http://127.0.0.1:{port}/api/upload"))
            .multipart(form)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let json: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(json["filename"], "r.txt");
        assert_eq!(json["parsed_results"]["Hemoglobin"]["classification"], "within");

        server.shutdown();
    }

    #[tokio::test]
    async fn invalid_origin_fails_before_bind() {
        let config = ServerConfig {
            allowed_origins: vec!["bad\norigin".into()],
            ..ephemeral_config()
        };
        let result = start_server(&config, ParameterCatalog::builtin()).await;
        assert!(matches!(result, Err(ServerError::InvalidOrigin(_))));
    }

    #[tokio::test]
    async fn port_in_use_is_bind_error() {
        let mut first = start_test_server().await;
        let config = ServerConfig {
            bind_addr: first.session.server_addr.parse().unwrap(),
            ..ServerConfig::default()
        };
        let result = start_server(&config, ParameterCatalog::builtin()).await;
        assert!(matches!(result, Err(ServerError::Bind { .. })));
        first.shutdown();
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let mut server = start_test_server().await;
        server.shutdown();
        server.shutdown(); // Second call should be safe
        server.wait().await;
    }
}
