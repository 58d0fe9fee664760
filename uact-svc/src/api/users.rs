//! User registration endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;
use uact_common::api::{RegisterQuery, RegisterResponse};

use super::ApiError;
use crate::AppState;

/// POST /api/register?userId=...&userName=...
///
/// Registers a new user. Re-registration of an existing id is rejected
/// with 409; the original record is left untouched.
pub async fn register_user(
    State(state): State<AppState>,
    Query(query): Query<RegisterQuery>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let mut engine = state.engine.write().await;
    let success = engine.register_user(&query.user_id, &query.user_name)?;
    info!(user_id = %query.user_id, "user registered");
    Ok(Json(RegisterResponse { success }))
}
