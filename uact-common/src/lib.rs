//! # UACT Common Library
//!
//! Shared code for the user activity tracking service:
//! - Error taxonomy
//! - API request/response types
//! - Configuration resolution
//! - Timestamp parsing and arithmetic

pub mod api;
pub mod config;
pub mod error;
pub mod time;

pub use error::{Error, Result};
