//! Session ledger and metrics engine
//!
//! Records login/logout sessions against registered users and computes
//! derived metrics: cumulative active minutes, inactivity relative to
//! "now", and per-day activity within a calendar month.
//!
//! Sessions are kept in insertion order, not time order. The engine does
//! no temporal validation: out-of-order recording, overlapping intervals,
//! and inverted intervals (logout before login) are all accepted as
//! reported.

use chrono::{Datelike, NaiveDateTime};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use uact_common::{time, Error, Result};

use super::registry::{User, UserRegistry};

/// A recorded login/logout interval for one user.
///
/// Immutable once recorded. No invariant relates the two timestamps;
/// an inverted interval yields a negative duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub login_time: NaiveDateTime,
    pub logout_time: NaiveDateTime,
}

impl Session {
    /// Whole-minute duration, truncated; negative for inverted intervals
    pub fn duration_minutes(&self) -> i64 {
        time::minutes_between(self.login_time, self.logout_time)
    }
}

/// Registry plus per-user session ledgers.
///
/// An explicit store object: constructed by the caller and injected into
/// whatever serves requests, so tests get isolated instances. The engine
/// itself is synchronous and does no locking; callers wrap it in a single
/// mutual-exclusion domain (see `AppState`).
#[derive(Debug, Default)]
pub struct ActivityEngine {
    registry: UserRegistry,
    /// Per-user ledgers, insertion-ordered and append-only.
    /// Created lazily on first record, never emptied.
    sessions: HashMap<String, Vec<Session>>,
}

impl ActivityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user; fails when the id is already present
    pub fn register_user(&mut self, user_id: &str, user_name: &str) -> Result<bool> {
        self.registry.register(user_id, user_name)
    }

    /// Look up a registered user's identity record
    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.registry.lookup(user_id)
    }

    /// A user's session ledger, in insertion order; `None` when nothing recorded
    pub fn user_sessions(&self, user_id: &str) -> Option<&[Session]> {
        self.sessions.get(user_id).map(Vec::as_slice)
    }

    /// Append a session to a registered user's ledger.
    ///
    /// The user must already be registered; on failure no ledger entry is
    /// created. The interval is stored as reported.
    pub fn record_session(
        &mut self,
        user_id: &str,
        login_time: NaiveDateTime,
        logout_time: NaiveDateTime,
    ) -> Result<()> {
        if !self.registry.contains(user_id) {
            return Err(Error::UserNotFound(user_id.to_string()));
        }
        self.sessions
            .entry(user_id.to_string())
            .or_default()
            .push(Session {
                login_time,
                logout_time,
            });
        debug!(user_id, "session recorded");
        Ok(())
    }

    /// Sum of whole-minute durations over every session in the ledger.
    ///
    /// Inverted intervals contribute negatively; nothing is filtered or
    /// clamped. An absent or empty ledger is a `NoSessions` error, which
    /// is distinct from a legitimate zero-minute total.
    pub fn total_activity_time(&self, user_id: &str) -> Result<i64> {
        let sessions = self.nonempty_ledger(user_id)?;
        Ok(sessions.iter().map(Session::duration_minutes).sum())
    }

    /// Users whose last-recorded session's logout is more than
    /// `threshold_days` whole days before now (strict comparison).
    ///
    /// "Last-recorded" means last in insertion order, not chronologically
    /// latest; with out-of-order recording these can differ. Users with no
    /// recorded sessions are excluded entirely. Result order is
    /// unspecified.
    pub fn find_inactive_users(&self, threshold_days: i64) -> Vec<String> {
        self.find_inactive_users_at(threshold_days, time::now())
    }

    /// `find_inactive_users` against an explicit "now" (deterministic for tests)
    pub fn find_inactive_users_at(&self, threshold_days: i64, now: NaiveDateTime) -> Vec<String> {
        self.sessions
            .iter()
            .filter_map(|(user_id, sessions)| {
                let last = sessions.last()?;
                let days_inactive = time::days_between(last.logout_time, now);
                (days_inactive > threshold_days).then(|| user_id.clone())
            })
            .collect()
    }

    /// Per-day activity minutes for sessions whose login falls in the
    /// given calendar year and month.
    ///
    /// Attribution is by the login timestamp only: a session starting in
    /// the target month and ending in the next counts wholly toward the
    /// login's day. Keys are ISO calendar dates; days with no qualifying
    /// session are absent. Multiple sessions on one day are summed.
    pub fn monthly_activity_metric(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<BTreeMap<String, i64>> {
        let sessions = self.nonempty_ledger(user_id)?;

        let mut minutes_by_day = BTreeMap::new();
        for session in sessions {
            let login = session.login_time;
            if login.year() != year || login.month() != month {
                continue;
            }
            *minutes_by_day.entry(time::day_key(login)).or_insert(0) +=
                session.duration_minutes();
        }
        Ok(minutes_by_day)
    }

    fn nonempty_ledger(&self, user_id: &str) -> Result<&[Session]> {
        self.sessions
            .get(user_id)
            .map(Vec::as_slice)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::NoSessions(user_id.to_string()))
    }
}
