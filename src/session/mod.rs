//! Session model for the gate.
//!
//! This module provides:
//! - `UserRecord`: the opaque identity the auth service reports for a user
//! - `SessionData`: a token-bearing session with origin-defined expiry
//! - `SessionState`: the pending/authenticated/unauthenticated view a page observes
//!
//! Session state is only ever a mirror of what the remote service
//! reported; nothing in this crate mints or mutates it locally.

pub mod data;

pub use data::{SessionData, SessionState, UserRecord};
