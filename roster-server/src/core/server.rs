//! Server Implementation
//!
//! HTTP server startup and graceful shutdown

use crate::api;
use crate::core::state::AppState;
use crate::core::{Result, ServerError};

/// HTTP Server
pub struct Server {
    state: AppState,
}

impl Server {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn run(self) -> Result<()> {
        let addr = self.state.config.bind_addr();
        let environment = self.state.config.environment.clone();
        let app = api::create_router(self.state);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!(%environment, "Roster server listening on {addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(ServerError::Io)?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutting down...");
}
