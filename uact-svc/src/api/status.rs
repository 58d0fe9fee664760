//! User status classification endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use uact_common::api::{LastSessionDateResponse, UserQuery, UserStatusResponse};

use super::ApiError;
use crate::analytics::UserStatusService;
use crate::AppState;

/// GET /api/userStatus?userId=...
///
/// Coarse classification of the user's cumulative activity
/// ("Inactive" / "Active" / "Highly active").
pub async fn user_status(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<UserStatusResponse>, ApiError> {
    let engine = state.engine.read().await;
    let service = UserStatusService::new(&*engine);
    let status = service.user_status(&query.user_id)?;
    Ok(Json(UserStatusResponse {
        user_id: query.user_id,
        status: status.to_string(),
    }))
}

/// GET /api/lastSessionDate?userId=...
///
/// Calendar date of the user's last-recorded session's logout.
pub async fn last_session_date(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<LastSessionDateResponse>, ApiError> {
    let engine = state.engine.read().await;
    let service = UserStatusService::new(&*engine);
    let last_session_date = service.last_session_date(&query.user_id)?;
    Ok(Json(LastSessionDateResponse {
        user_id: query.user_id,
        last_session_date,
    }))
}
