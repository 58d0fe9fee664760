//! User status classification
//!
//! Derives a coarse activity status from the metrics engine. The
//! classifier depends only on the narrow `ActivityQueries` trait, so
//! tests substitute a hand-written double instead of the real engine.

use std::collections::BTreeMap;
use uact_common::{time, Error, Result};

use super::engine::{ActivityEngine, Session};

/// The metrics engine's query surface, as seen by collaborators
pub trait ActivityQueries {
    /// Cumulative whole-minute activity; `NoSessions` on an empty ledger
    fn total_activity_time(&self, user_id: &str) -> Result<i64>;

    /// User ids inactive for strictly more than `threshold_days` whole days
    fn find_inactive_users(&self, threshold_days: i64) -> Vec<String>;

    /// Per-day activity minutes for the given calendar year and month
    fn monthly_activity_metric(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<BTreeMap<String, i64>>;

    /// The last-recorded session for a user, if any
    fn last_session(&self, user_id: &str) -> Option<Session>;
}

impl ActivityQueries for ActivityEngine {
    fn total_activity_time(&self, user_id: &str) -> Result<i64> {
        ActivityEngine::total_activity_time(self, user_id)
    }

    fn find_inactive_users(&self, threshold_days: i64) -> Vec<String> {
        ActivityEngine::find_inactive_users(self, threshold_days)
    }

    fn monthly_activity_metric(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<BTreeMap<String, i64>> {
        ActivityEngine::monthly_activity_metric(self, user_id, year, month)
    }

    fn last_session(&self, user_id: &str) -> Option<Session> {
        self.user_sessions(user_id)
            .and_then(|sessions| sessions.last().cloned())
    }
}

/// Coarse activity classification from cumulative minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    /// Less than 60 cumulative minutes
    Inactive,
    /// 60 to 119 cumulative minutes
    Active,
    /// 120 minutes or more
    HighlyActive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Inactive => "Inactive",
            UserStatus::Active => "Active",
            UserStatus::HighlyActive => "Highly active",
        }
    }

    fn from_total_minutes(total: i64) -> Self {
        if total < 60 {
            UserStatus::Inactive
        } else if total < 120 {
            UserStatus::Active
        } else {
            UserStatus::HighlyActive
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification service over any `ActivityQueries` implementation
pub struct UserStatusService<'a, Q: ActivityQueries + ?Sized> {
    queries: &'a Q,
}

impl<'a, Q: ActivityQueries + ?Sized> UserStatusService<'a, Q> {
    pub fn new(queries: &'a Q) -> Self {
        Self { queries }
    }

    /// Classify a user from their cumulative activity minutes
    pub fn user_status(&self, user_id: &str) -> Result<UserStatus> {
        let total = self.queries.total_activity_time(user_id)?;
        Ok(UserStatus::from_total_minutes(total))
    }

    /// Calendar date of the last-recorded session's logout
    pub fn last_session_date(&self, user_id: &str) -> Result<String> {
        self.queries
            .last_session(user_id)
            .map(|session| time::day_key(session.logout_time))
            .ok_or_else(|| Error::NoSessions(user_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uact_common::time::datetime;

    /// Test double: fixed answers, no real ledger behind it
    struct FixedQueries {
        total: Option<i64>,
        last: Option<Session>,
    }

    impl ActivityQueries for FixedQueries {
        fn total_activity_time(&self, user_id: &str) -> Result<i64> {
            self.total
                .ok_or_else(|| Error::NoSessions(user_id.to_string()))
        }

        fn find_inactive_users(&self, _threshold_days: i64) -> Vec<String> {
            Vec::new()
        }

        fn monthly_activity_metric(
            &self,
            user_id: &str,
            _year: i32,
            _month: u32,
        ) -> Result<BTreeMap<String, i64>> {
            self.total
                .map(|_| BTreeMap::new())
                .ok_or_else(|| Error::NoSessions(user_id.to_string()))
        }

        fn last_session(&self, _user_id: &str) -> Option<Session> {
            self.last.clone()
        }
    }

    fn fixed(total: i64) -> FixedQueries {
        FixedQueries {
            total: Some(total),
            last: None,
        }
    }

    #[test]
    fn test_status_thresholds() {
        let cases = [
            (0, UserStatus::Inactive),
            (59, UserStatus::Inactive),
            (60, UserStatus::Active),
            (90, UserStatus::Active),
            (119, UserStatus::Active),
            (120, UserStatus::HighlyActive),
            (600, UserStatus::HighlyActive),
        ];
        for (minutes, expected) in cases {
            let queries = fixed(minutes);
            let service = UserStatusService::new(&queries);
            assert_eq!(service.user_status("u1").unwrap(), expected, "{} min", minutes);
        }
    }

    #[test]
    fn test_negative_total_classifies_inactive() {
        let queries = fixed(-30);
        let service = UserStatusService::new(&queries);
        assert_eq!(service.user_status("u1").unwrap(), UserStatus::Inactive);
    }

    #[test]
    fn test_status_propagates_no_sessions() {
        let queries = FixedQueries {
            total: None,
            last: None,
        };
        let service = UserStatusService::new(&queries);
        assert!(matches!(
            service.user_status("u1").unwrap_err(),
            Error::NoSessions(_)
        ));
    }

    #[test]
    fn test_last_session_date() {
        let queries = FixedQueries {
            total: Some(10),
            last: Some(Session {
                login_time: datetime(2024, 5, 20, 9, 0),
                logout_time: datetime(2024, 5, 21, 1, 30),
            }),
        };
        let service = UserStatusService::new(&queries);
        assert_eq!(service.last_session_date("u1").unwrap(), "2024-05-21");
    }

    #[test]
    fn test_last_session_date_without_sessions_is_error() {
        let queries = FixedQueries {
            total: None,
            last: None,
        };
        let service = UserStatusService::new(&queries);
        assert!(matches!(
            service.last_session_date("u1").unwrap_err(),
            Error::NoSessions(_)
        ));
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(UserStatus::Inactive.to_string(), "Inactive");
        assert_eq!(UserStatus::Active.to_string(), "Active");
        assert_eq!(UserStatus::HighlyActive.to_string(), "Highly active");
    }
}
