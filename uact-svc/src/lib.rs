//! uact-svc library — user activity tracking service
//!
//! In-memory registry of users and their login/logout sessions, with an
//! axum HTTP API over the derived activity metrics.

use axum::Router;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

pub mod analytics;
pub mod api;

use analytics::ActivityEngine;

/// Application state shared across HTTP handlers.
///
/// The engine lives behind a single `RwLock`: registration and session
/// recording take the write half, metrics queries the read half, so no
/// request ever observes a partially-appended ledger or a racing
/// registry insert. State lives for the process lifetime; nothing is
/// persisted.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<ActivityEngine>>,
}

impl AppState {
    /// Create application state with an empty registry and ledger
    pub fn new() -> Self {
        Self {
            engine: Arc::new(RwLock::new(ActivityEngine::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/api/register", post(api::register_user))
        .route("/api/recordSession", post(api::record_session))
        .route("/api/totalActivity", get(api::total_activity))
        .route("/api/inactiveUsers", get(api::inactive_users))
        .route("/api/monthlyActivity", get(api::monthly_activity))
        .route("/api/userStatus", get(api::user_status))
        .route("/api/lastSessionDate", get(api::last_session_date))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
