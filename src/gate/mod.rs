//! The session gate.
//!
//! `SessionGate` mediates between page-level consumers and the remote
//! auth service: it signs users in and up, hydrates session state on
//! mount, and guarantees that sign-out leaves no stale session artifacts
//! in the local store. It never mints session state of its own - every
//! `Authenticated` value it publishes came out of a service response.

pub mod guard;
pub mod hooks;

pub use guard::{DashboardRedirect, DASHBOARD_ROUTE};
pub use hooks::{NoopHooks, RequestHooks};

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::api::AuthApi;
use crate::nav::Navigator;
use crate::session::{SessionData, SessionState};
use crate::store::{KeyValueStore, SESSION_TOKEN_KEY, USER_RECORD_KEY};

/// Settle delay after sign-out, before the call resolves.
/// Gives the service client's own asynchronous cleanup time to finish so
/// no page observes a half-cleared session.
const SIGN_OUT_SETTLE_MS: u64 = 100;

pub struct SessionGate<A: AuthApi> {
    api: A,
    store: Arc<dyn KeyValueStore>,
    state_tx: watch::Sender<SessionState>,
}

impl<A: AuthApi> SessionGate<A> {
    /// Create a gate in the `Pending` state
    pub fn new(api: A, store: Arc<dyn KeyValueStore>) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Pending);
        Self {
            api,
            store,
            state_tx,
        }
    }

    /// Current session state. `Pending` until the first hydration or
    /// credential call resolves; consumers must not act while pending.
    pub fn query_session(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to session state changes
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Email/password sign-in with three-phase hooks.
    ///
    /// `on_request` fires before the service call, `on_response` after it
    /// answers regardless of outcome, `on_success` only on success. On
    /// success the session is mirrored to the store and the navigator
    /// replace-navigates to `redirect_target`. Failures propagate
    /// untransformed; on failure nothing is navigated and nothing is
    /// written to the store.
    pub async fn sign_in_with_email(
        &self,
        email: &str,
        password: &str,
        redirect_target: &str,
        hooks: &mut dyn RequestHooks,
        nav: &mut dyn Navigator,
    ) -> Result<SessionData> {
        hooks.on_request();
        let result = self.api.sign_in(email, password).await;
        hooks.on_response();

        match result {
            Ok(data) => {
                self.settle_signed_in(&data);
                hooks.on_success();
                nav.replace(redirect_target);
                info!(user = %data.user.id, "sign-in succeeded");
                Ok(data)
            }
            Err(e) => {
                debug!(error = %e, "sign-in rejected by auth service");
                Err(e)
            }
        }
    }

    /// Email/password sign-up. Same hook lifecycle and success handling
    /// as sign-in; the service signs the new account in directly.
    pub async fn sign_up_with_email(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
        redirect_target: &str,
        hooks: &mut dyn RequestHooks,
        nav: &mut dyn Navigator,
    ) -> Result<SessionData> {
        hooks.on_request();
        let result = self.api.sign_up(email, password, name).await;
        hooks.on_response();

        match result {
            Ok(data) => {
                self.settle_signed_in(&data);
                hooks.on_success();
                nav.replace(redirect_target);
                info!(user = %data.user.id, "sign-up succeeded");
                Ok(data)
            }
            Err(e) => {
                debug!(error = %e, "sign-up rejected by auth service");
                Err(e)
            }
        }
    }

    /// Hydrate session state by asking the service who we are.
    ///
    /// Reads the mirrored token; no token means `Unauthenticated` without
    /// a network round trip, as does a cached record that is already past
    /// its expiry. Transport failures propagate and leave the state
    /// untouched.
    pub async fn hydrate(&self) -> Result<SessionState> {
        let token = match self.store.get(SESSION_TOKEN_KEY)? {
            Some(token) => token,
            None => {
                return Ok(self.publish(SessionState::Unauthenticated));
            }
        };

        if let Some(raw) = self.store.get(USER_RECORD_KEY)? {
            match serde_json::from_str::<SessionData>(&raw) {
                Ok(cached) if cached.is_expired() => {
                    debug!("cached session is past expiry, skipping session query");
                    return Ok(self.publish(SessionState::Unauthenticated));
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "unreadable cached session record, re-querying");
                }
            }
        }

        match self.api.fetch_session(&token).await? {
            Some(data) => {
                self.mirror(&data);
                Ok(self.publish(SessionState::Authenticated(data)))
            }
            None => Ok(self.publish(SessionState::Unauthenticated)),
        }
    }

    /// Sign out and clear the mirrored session.
    ///
    /// Invokes the service sign-out, then removes both store keys whether
    /// or not they were present, then waits the settle delay before
    /// resolving. Removal failures are surfaced, not swallowed; both
    /// removals are attempted and the delay elapses regardless, so the
    /// call never resolves early.
    pub async fn sign_out(&self) -> Result<()> {
        let token = match self.store.get(SESSION_TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "could not read mirrored token for sign-out");
                None
            }
        };

        let remote = match token {
            Some(token) => self.api.sign_out(&token).await,
            None => Ok(()),
        };

        let token_removed = self.store.remove(SESSION_TOKEN_KEY);
        let record_removed = self.store.remove(USER_RECORD_KEY);

        self.publish(SessionState::Unauthenticated);

        tokio::time::sleep(Duration::from_millis(SIGN_OUT_SETTLE_MS)).await;

        remote?;
        token_removed?;
        record_removed?;
        info!("sign-out complete");
        Ok(())
    }

    fn settle_signed_in(&self, data: &SessionData) {
        self.mirror(data);
        self.publish(SessionState::Authenticated(data.clone()));
    }

    /// Mirror the session into the local store, the way the browser SDK
    /// kept its local-storage entries. Best-effort: a consumer that can
    /// sign in but not cache is still signed in.
    fn mirror(&self, data: &SessionData) {
        if let Err(e) = self.store.set(SESSION_TOKEN_KEY, &data.token) {
            warn!(error = %e, "failed to mirror session token");
            return;
        }
        match serde_json::to_string(data) {
            Ok(raw) => {
                if let Err(e) = self.store.set(USER_RECORD_KEY, &raw) {
                    warn!(error = %e, "failed to mirror session record");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize session record"),
        }
    }

    fn publish(&self, state: SessionState) -> SessionState {
        self.state_tx.send_replace(state.clone());
        state
    }
}
