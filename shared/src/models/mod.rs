//! Data models
//!
//! Wire shapes shared between wanderlust-server and the frontend (via API).
//! Field names are camelCase on the wire and must round-trip unchanged
//! against previously stored records.

pub mod booking;
pub mod tour;
pub mod user;

// Re-exports
pub use booking::*;
pub use tour::*;
pub use user::*;
