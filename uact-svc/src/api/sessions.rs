//! Session recording endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;
use uact_common::api::{RecordSessionQuery, StatusResponse};
use uact_common::time;

use super::ApiError;
use crate::AppState;

/// POST /api/recordSession?userId=...&loginTime=...&logoutTime=...
///
/// Appends a session to a registered user's ledger. Timestamps are
/// ISO-8601 local date-times (seconds optional); unparseable values are
/// rejected here with 400 before the core is touched. No temporal
/// ordering is enforced against existing sessions.
pub async fn record_session(
    State(state): State<AppState>,
    Query(query): Query<RecordSessionQuery>,
) -> Result<Json<StatusResponse>, ApiError> {
    let login_time = time::parse_timestamp(&query.login_time)?;
    let logout_time = time::parse_timestamp(&query.logout_time)?;

    let mut engine = state.engine.write().await;
    engine.record_session(&query.user_id, login_time, logout_time)?;
    info!(user_id = %query.user_id, "session recorded");

    Ok(Json(StatusResponse {
        status: "recorded".to_string(),
    }))
}
