//! Metrics query endpoints: total activity, inactivity scan, monthly buckets

use axum::{
    extract::{Query, State},
    Json,
};
use uact_common::api::{
    InactiveUsersQuery, InactiveUsersResponse, MonthlyActivityQuery, MonthlyActivityResponse,
    TotalActivityResponse, UserQuery,
};
use uact_common::time;

use super::ApiError;
use crate::AppState;

/// GET /api/totalActivity?userId=...
///
/// Cumulative whole-minute activity over the user's entire ledger.
/// A user with no recorded sessions is 404, not zero.
pub async fn total_activity(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<TotalActivityResponse>, ApiError> {
    let engine = state.engine.read().await;
    let total_minutes = engine.total_activity_time(&query.user_id)?;
    Ok(Json(TotalActivityResponse {
        user_id: query.user_id,
        total_minutes,
    }))
}

/// GET /api/inactiveUsers?days=N
///
/// Users whose last-recorded session's logout lies strictly more than N
/// whole days in the past. Users without sessions are never listed.
pub async fn inactive_users(
    State(state): State<AppState>,
    Query(query): Query<InactiveUsersQuery>,
) -> Result<Json<InactiveUsersResponse>, ApiError> {
    let engine = state.engine.read().await;
    let user_ids = engine.find_inactive_users(query.days);
    Ok(Json(InactiveUsersResponse {
        days: query.days,
        user_ids,
    }))
}

/// GET /api/monthlyActivity?userId=...&month=YYYY-MM
///
/// Per-day activity minutes for sessions logging in during the given
/// month. Days without activity are absent from the map.
pub async fn monthly_activity(
    State(state): State<AppState>,
    Query(query): Query<MonthlyActivityQuery>,
) -> Result<Json<MonthlyActivityResponse>, ApiError> {
    let (year, month) = time::parse_year_month(&query.month)?;

    let engine = state.engine.read().await;
    let minutes_by_day = engine.monthly_activity_metric(&query.user_id, year, month)?;
    Ok(Json(MonthlyActivityResponse {
        user_id: query.user_id,
        month: query.month,
        minutes_by_day,
    }))
}
