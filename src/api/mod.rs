//! HTTP client module for the remote authentication service.
//!
//! This module provides the `AuthClient` for talking to the StagePass
//! auth service: email/password sign-in and sign-up, session query, and
//! sign-out. All calls share one configured base URL.
//!
//! The `AuthApi` trait is the seam the session gate is written against,
//! so the gate can be exercised without a network.

pub mod client;
pub mod error;

pub use client::AuthClient;
pub use error::ApiError;

use anyhow::Result;

use crate::session::SessionData;

/// Operations the session gate needs from the auth service.
///
/// `AuthClient` is the production implementation; tests substitute their
/// own. Failures are surfaced as-is so callers see the service's own
/// error channel, never a transformed one.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Email/password sign-in. Returns the new session on success.
    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionData>;

    /// Email/password sign-up. Returns the new session on success.
    async fn sign_up(&self, email: &str, password: &str, name: Option<&str>)
        -> Result<SessionData>;

    /// Query the session behind `token`. `Ok(None)` means the service
    /// does not recognize the token (including 401); transport failures
    /// are errors.
    async fn fetch_session(&self, token: &str) -> Result<Option<SessionData>>;

    /// Invalidate the session behind `token` on the service side.
    async fn sign_out(&self, token: &str) -> Result<()>;
}
