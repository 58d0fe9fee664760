//! User registry
//!
//! Maps opaque caller-supplied user ids to identity records. Ids are
//! unique for the process lifetime; records are immutable after creation.

use std::collections::HashMap;
use uact_common::{Error, Result};

/// Identity record for a registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique opaque identifier, caller-supplied
    pub user_id: String,
    /// Display label, no uniqueness constraint
    pub user_name: String,
}

/// In-memory user registry
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: HashMap<String, User>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user.
    ///
    /// Re-registration of an existing id is a hard error, not a no-op,
    /// regardless of the name supplied. Returns `true` on success to keep
    /// the boolean-confirmation contract for callers.
    pub fn register(&mut self, user_id: &str, user_name: &str) -> Result<bool> {
        if self.users.contains_key(user_id) {
            return Err(Error::AlreadyExists(user_id.to_string()));
        }
        self.users.insert(
            user_id.to_string(),
            User {
                user_id: user_id.to_string(),
                user_name: user_name.to_string(),
            },
        );
        Ok(true)
    }

    /// Look up a user by id; `None` signals an unknown user
    pub fn lookup(&self, user_id: &str) -> Option<&User> {
        self.users.get(user_id)
    }

    /// Whether a user id is registered
    pub fn contains(&self, user_id: &str) -> bool {
        self.users.contains_key(user_id)
    }
}
