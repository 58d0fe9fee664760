//! Shared API request/response types
//!
//! Wire types exchanged between the HTTP layer of `uact-svc` and its
//! clients. Query-parameter request shapes mirror the service's
//! parameter-driven endpoints; responses are JSON throughout.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ========================================
// Request Types (query parameters)
// ========================================

/// Query parameters for POST /api/register
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegisterQuery {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
}

/// Query parameters for POST /api/recordSession
///
/// Timestamps are ISO-8601 local date-times, seconds optional
/// (e.g. `2024-05-20T09:00`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordSessionQuery {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "loginTime")]
    pub login_time: String,
    #[serde(rename = "logoutTime")]
    pub logout_time: String,
}

/// Query parameters for endpoints addressing a single user
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserQuery {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Query parameters for GET /api/inactiveUsers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InactiveUsersQuery {
    pub days: i64,
}

/// Query parameters for GET /api/monthlyActivity
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonthlyActivityQuery {
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Target month as `YYYY-MM`
    pub month: String,
}

// ========================================
// Response Types
// ========================================

/// Response for POST /api/register
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
}

/// Generic status acknowledgement (e.g. session recorded)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Response for GET /api/totalActivity
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TotalActivityResponse {
    pub user_id: String,
    pub total_minutes: i64,
}

/// Response for GET /api/inactiveUsers
///
/// `user_ids` has set semantics; no ordering is guaranteed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InactiveUsersResponse {
    pub days: i64,
    pub user_ids: Vec<String>,
}

/// Response for GET /api/monthlyActivity
///
/// `minutes_by_day` keys are ISO calendar dates (`YYYY-MM-DD`); days with
/// no qualifying session are absent rather than zero.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonthlyActivityResponse {
    pub user_id: String,
    pub month: String,
    pub minutes_by_day: BTreeMap<String, i64>,
}

/// Response for GET /api/userStatus
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserStatusResponse {
    pub user_id: String,
    pub status: String,
}

/// Response for GET /api/lastSessionDate
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LastSessionDateResponse {
    pub user_id: String,
    /// ISO calendar date of the last-recorded session's logout
    pub last_session_date: String,
}

/// Error payload returned by all endpoints on failure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
