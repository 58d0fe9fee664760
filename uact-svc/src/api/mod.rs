//! HTTP API handlers for uact-svc
//!
//! The request layer owns parameter extraction, timestamp/month parsing,
//! JSON encoding, and status-code mapping; the analytics core only ever
//! sees already-parsed values.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uact_common::api::ErrorResponse;
use uact_common::Error;

pub mod health;
pub mod metrics;
pub mod sessions;
pub mod status;
pub mod users;

pub use health::health_routes;
pub use metrics::{inactive_users, monthly_activity, total_activity};
pub use sessions::record_session;
pub use status::{last_session_date, user_status};
pub use users::register_user;

/// Maps core errors onto HTTP responses with a JSON error body
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::AlreadyExists(_) => StatusCode::CONFLICT,
            Error::UserNotFound(_) | Error::NoSessions(_) => StatusCode::NOT_FOUND,
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::Io(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });

        (status, body).into_response()
    }
}
