//! REST API endpoint handlers.
//!
//! All handlers read through the shared [`AppState`]. Entity reads degrade
//! to empty/not-found responses per the store's non-fatal read policy;
//! writes require an authenticated user and propagate failures as JSON
//! errors.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/v1/health` | Liveness probe |
//! | `GET` | `/api/events` | List events (upcoming by default) |
//! | `GET` | `/api/events/{id}` | Single event |
//! | `PATCH` | `/api/events/{id}` | Partial-field event update |
//! | `GET` | `/api/events/{id}/reviews` | Review bundles for an event |
//! | `POST` | `/api/reviews/{event_id}` | Submit a review bundle |
//! | `GET` | `/api/venues` | List venues (`type`/`exclude` filters) |
//! | `GET` | `/api/venues/{id}` | Single venue |
//! | `GET` | `/api/hosts/{id}` | Single host |
//! | `GET` | `/api/tags` | List tags |
//! | `GET` | `/api/users/saved-events[/{id}]` | Saved state / saved list |
//! | `POST` | `/api/users/saved-events[/{id}]` | Toggle a save (auth required) |
//!
//! (`saved-venues` and `saved-hosts` mirror `saved-events`.)

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use dispatch_reviews::ReviewEntry;
use dispatch_saved::SavedKind;
use dispatch_store::EventFilter;
use dispatch_types::{Event, EventPatch, ReviewBundle, Tag, Venue};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/events`.
#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    /// Keep only events at this venue id.
    pub venue: Option<String>,
    /// Keep only events listing this host reference.
    pub host: Option<String>,
    /// Include past events (default: upcoming only).
    pub all: Option<bool>,
}

/// Query parameters for `GET /api/venues`.
#[derive(Debug, Deserialize)]
pub struct VenuesQuery {
    /// Keep only venues of this type.
    #[serde(rename = "type")]
    pub venue_type: Option<String>,
    /// Drop the venue with this id (e.g. "other venues" lists).
    pub exclude: Option<String>,
    /// Force a re-read of the venues file.
    pub refresh: Option<bool>,
}

/// Body of `POST /api/reviews/{event_id}`.
#[derive(Debug, Deserialize)]
pub struct SubmitReviewsBody {
    /// The submission's entries (general/venue/DJ sub-reviews).
    #[serde(default)]
    pub content: Vec<ReviewEntry>,
}

/// Body of the saved-entity toggle endpoints. The entity id may arrive
/// under the generic `entityId` key or the kind-specific one
/// (`eventId`/`venueId`/`hostId`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleBody {
    #[serde(alias = "eventId", alias = "venueId", alias = "hostId")]
    pub entity_id: String,
    pub save_toggle: bool,
}

/// Body of the path-addressed toggle variant (`POST .../{id}`), where the
/// entity id comes from the path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFlagBody {
    pub save_toggle: bool,
}

/// An event enriched with resolved display names.
#[derive(Debug, Serialize)]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,
    /// The location field resolved against the venues file.
    pub location_name: String,
    /// Host references resolved against the hosts file, in order.
    pub host_names: Vec<String>,
}

fn enrich(state: &AppState, event: Event) -> EventView {
    let location_name = state.store.resolve_location(&event.location);
    let host_names = state.store.resolve_event_hosts(&event);
    EventView {
        event,
        location_name,
        host_names,
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "name": "dispatch-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// List events, upcoming-only unless `all=true`, enriched with resolved
/// names and sorted ascending by start.
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventsQuery>,
) -> Json<Vec<EventView>> {
    let filter = EventFilter {
        venue: params.venue,
        host: params.host,
        upcoming_only: !params.all.unwrap_or(false),
    };
    let events = state.store.events(&filter);
    Json(events.into_iter().map(|e| enrich(&state, e)).collect())
}

/// Single event by id, past or future.
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<EventView>> {
    let event = state
        .store
        .event(&id)
        .ok_or_else(|| ApiError::NotFound(format!("event {id}")))?;
    Ok(Json(enrich(&state, event)))
}

/// Apply a partial-field update to an event.
pub async fn patch_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<EventPatch>,
) -> ApiResult<Json<EventView>> {
    let updated = state
        .store
        .update_event(&id, &patch)?
        .ok_or_else(|| ApiError::NotFound(format!("event {id}")))?;
    Ok(Json(enrich(&state, updated)))
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

/// Review bundles for one event, in first-seen submission order.
pub async fn event_reviews(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<Vec<ReviewBundle>> {
    Json(state.reviews.for_event(&id))
}

/// Submit a review bundle. Requires an authenticated user; the whole
/// submission is validated before any row is written.
pub async fn submit_reviews(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<SubmitReviewsBody>,
) -> ApiResult<Json<serde_json::Value>> {
    let user = state.auth.require_user(&headers)?;
    let written = state.reviews.submit(&body.content, &user, &event_id)?;
    Ok(Json(json!({ "success": true, "rows": written })))
}

// ---------------------------------------------------------------------------
// Venues, hosts, tags
// ---------------------------------------------------------------------------

/// List venues with optional type/exclude filters.
pub async fn list_venues(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VenuesQuery>,
) -> Json<Vec<Venue>> {
    let venues = state.store.venues(params.refresh.unwrap_or(false));
    let filtered = venues
        .into_iter()
        .filter(|v| match &params.venue_type {
            Some(t) => &v.venue_type == t,
            None => true,
        })
        .filter(|v| match &params.exclude {
            Some(id) => &v.id != id,
            None => true,
        })
        .collect();
    Json(filtered)
}

/// Single venue by id.
pub async fn get_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Venue>> {
    let venue = state
        .store
        .venue(&id)
        .ok_or_else(|| ApiError::NotFound(format!("venue {id}")))?;
    Ok(Json(venue))
}

/// Single host by id.
pub async fn get_host(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<dispatch_types::Host>> {
    let host = state
        .store
        .host(&id)
        .ok_or_else(|| ApiError::NotFound(format!("host {id}")))?;
    Ok(Json(host))
}

/// List all tags.
pub async fn list_tags(State(state): State<Arc<AppState>>) -> Json<Vec<Tag>> {
    Json(state.store.tags())
}

// ---------------------------------------------------------------------------
// Saved entities
// ---------------------------------------------------------------------------

async fn check_saved(
    state: Arc<AppState>,
    kind: SavedKind,
    entity_id: String,
    headers: HeaderMap,
) -> Json<serde_json::Value> {
    // Anonymous readers see an unsaved state, never an error.
    let saved = match state.auth.current_user(&headers) {
        Some(user) => state.ledger(kind).is_saved(&entity_id, &user),
        None => false,
    };
    Json(json!({ "isSaved": saved }))
}

async fn list_saved(
    state: Arc<AppState>,
    kind: SavedKind,
    headers: HeaderMap,
) -> Json<serde_json::Value> {
    let ids = match state.auth.current_user(&headers) {
        Some(user) => state.ledger(kind).saved_for_user(&user),
        None => Vec::new(),
    };
    Json(json!({ "saved": ids }))
}

async fn toggle_saved(
    state: Arc<AppState>,
    kind: SavedKind,
    headers: HeaderMap,
    body: ToggleBody,
) -> ApiResult<Json<serde_json::Value>> {
    let user = state.auth.require_user(&headers)?;
    let id = state
        .ledger(kind)
        .toggle(&body.entity_id, &user, body.save_toggle)?;
    Ok(Json(json!({ "success": true, "id": id })))
}

macro_rules! saved_handlers {
    ($kind:expr, $check:ident, $list:ident, $toggle:ident, $toggle_by_id:ident) => {
        pub async fn $check(
            State(state): State<Arc<AppState>>,
            Path(id): Path<String>,
            headers: HeaderMap,
        ) -> Json<serde_json::Value> {
            check_saved(state, $kind, id, headers).await
        }

        pub async fn $list(
            State(state): State<Arc<AppState>>,
            headers: HeaderMap,
        ) -> Json<serde_json::Value> {
            list_saved(state, $kind, headers).await
        }

        pub async fn $toggle(
            State(state): State<Arc<AppState>>,
            headers: HeaderMap,
            Json(body): Json<ToggleBody>,
        ) -> ApiResult<Json<serde_json::Value>> {
            toggle_saved(state, $kind, headers, body).await
        }

        pub async fn $toggle_by_id(
            State(state): State<Arc<AppState>>,
            Path(id): Path<String>,
            headers: HeaderMap,
            Json(body): Json<ToggleFlagBody>,
        ) -> ApiResult<Json<serde_json::Value>> {
            let body = ToggleBody {
                entity_id: id,
                save_toggle: body.save_toggle,
            };
            toggle_saved(state, $kind, headers, body).await
        }
    };
}

saved_handlers!(
    SavedKind::Events,
    check_saved_event,
    list_saved_events,
    toggle_saved_event,
    toggle_saved_event_by_id
);
saved_handlers!(
    SavedKind::Venues,
    check_saved_venue,
    list_saved_venues,
    toggle_saved_venue,
    toggle_saved_venue_by_id
);
saved_handlers!(
    SavedKind::Hosts,
    check_saved_host,
    list_saved_hosts,
    toggle_saved_host,
    toggle_saved_host_by_id
);
