//! Analytics core: user registry, session ledger, and derived metrics.
//!
//! The registry maps opaque user ids to identity records and enforces
//! uniqueness; the engine appends login/logout sessions to per-user
//! ledgers and answers metrics queries over them. The status classifier
//! sits on top of the engine behind a narrow query trait.

pub mod engine;
pub mod registry;
pub mod status;

pub use engine::{ActivityEngine, Session};
pub use registry::{User, UserRegistry};
pub use status::{ActivityQueries, UserStatus, UserStatusService};
