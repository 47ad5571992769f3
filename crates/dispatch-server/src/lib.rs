//! HTTP API server for Dispatch.
//!
//! Serves the events/venues/hosts catalog, per-user saved entities, and
//! event reviews over JSON, backed by the flat-file record store.
//! Authentication is delegated to a hosted identity provider behind the
//! [`AuthProvider`] seam.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use auth::{AuthProvider, BearerAuth, StaticUser};
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use server::ApiServer;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn health_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let state = Arc::new(AppState::new(dispatch_store::DataDir::new(dir.path())));
        let app = router::build_router(state);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn empty_data_dir_lists_no_events() {
        let dir = tempfile::tempdir().unwrap();
        let state = Arc::new(AppState::new(dispatch_store::DataDir::new(dir.path())));
        let app = router::build_router(state);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/events")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }
}
