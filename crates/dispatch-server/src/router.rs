use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the axum router with all Dispatch endpoints.
///
/// CORS allows any origin so browser clients on other hosts can consume
/// the API during development; restrict this for production deployments.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/v1/health", get(handlers::health))
        // Events
        .route("/api/events", get(handlers::list_events))
        .route(
            "/api/events/:id",
            get(handlers::get_event).patch(handlers::patch_event),
        )
        .route("/api/events/:id/reviews", get(handlers::event_reviews))
        // Reviews
        .route("/api/reviews/:event_id", post(handlers::submit_reviews))
        // Venues, hosts, tags
        .route("/api/venues", get(handlers::list_venues))
        .route("/api/venues/:id", get(handlers::get_venue))
        .route("/api/hosts/:id", get(handlers::get_host))
        .route("/api/tags", get(handlers::list_tags))
        // Saved entities
        .route(
            "/api/users/saved-events",
            get(handlers::list_saved_events).post(handlers::toggle_saved_event),
        )
        .route(
            "/api/users/saved-events/:id",
            get(handlers::check_saved_event).post(handlers::toggle_saved_event_by_id),
        )
        .route(
            "/api/users/saved-venues",
            get(handlers::list_saved_venues).post(handlers::toggle_saved_venue),
        )
        .route(
            "/api/users/saved-venues/:id",
            get(handlers::check_saved_venue).post(handlers::toggle_saved_venue_by_id),
        )
        .route(
            "/api/users/saved-hosts",
            get(handlers::list_saved_hosts).post(handlers::toggle_saved_host),
        )
        .route(
            "/api/users/saved-hosts/:id",
            get(handlers::check_saved_host).post(handlers::toggle_saved_host_by_id),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
