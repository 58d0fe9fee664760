//! Common error types for UACT

use thiserror::Error;

/// Common result type for UACT operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the UACT crates
#[derive(Error, Debug)]
pub enum Error {
    /// Registration of an identifier that is already present
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    /// Operation referencing an unregistered user identifier
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Metrics query against a user with an empty or absent session ledger.
    /// Deliberately distinct from "zero minutes of activity".
    #[error("No sessions found for user: {0}")]
    NoSessions(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
