use std::sync::Arc;

use tokio::net::TcpListener;

use dispatch_store::DataDir;

use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};
use crate::router::build_router;
use crate::state::AppState;

/// The Dispatch API server.
pub struct ApiServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl ApiServer {
    /// A server over the configured data directory with default wiring.
    pub fn new(config: ServerConfig) -> Self {
        let state = Arc::new(AppState::new(DataDir::new(&config.data_dir)));
        Self { config, state }
    }

    /// A server with pre-built state (custom auth provider or clock).
    pub fn with_state(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ApiResult<()> {
        let app = build_router(self.state);
        let listener = TcpListener::bind(&self.config.bind_addr)
            .await
            .map_err(|e| ApiError::Internal(format!("bind {}: {e}", self.config.bind_addr)))?;
        tracing::info!("dispatch server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))
    }
}
