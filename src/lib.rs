//! StagePass session gate.
//!
//! Client library for the StagePass event platform's authentication
//! flow: email/password sign-in and sign-up against the hosted auth
//! service, reactive session state for page-level consumers, a one-shot
//! redirect guard for the protected speaker dashboard, and a sign-out
//! path that leaves no stale session artifacts behind.
//!
//! The pieces a browser would provide for free - local storage and
//! history navigation - are modeled as injected capabilities
//! ([`store::KeyValueStore`] and [`nav::Navigator`]) so the whole flow
//! can run and be tested anywhere.

pub mod api;
pub mod config;
pub mod gate;
pub mod nav;
pub mod session;
pub mod store;

pub use api::{ApiError, AuthApi, AuthClient};
pub use config::Config;
pub use gate::{DashboardRedirect, NoopHooks, RequestHooks, SessionGate, DASHBOARD_ROUTE};
pub use nav::{Navigator, RecordingNavigator, TracingNavigator};
pub use session::{SessionData, SessionState, UserRecord};
pub use store::{FileStore, KeyValueStore, MemoryStore, SESSION_TOKEN_KEY, USER_RECORD_KEY};
