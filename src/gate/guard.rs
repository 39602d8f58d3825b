use crate::nav::Navigator;
use crate::session::SessionState;

/// Route to the protected speaker dashboard
pub const DASHBOARD_ROUTE: &str = "/speaker-dashboard";

/// One-shot redirect guard for the sign-in page.
///
/// Feeds on session state observations: `Pending` never redirects;
/// the first `Authenticated` observation performs exactly one
/// replace-navigation to the dashboard. Replacement, not push, so the
/// redirect cannot loop through history back into the sign-in page.
#[derive(Debug, Default)]
pub struct DashboardRedirect {
    redirected: bool,
}

impl DashboardRedirect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe a session state. Returns true if a navigation happened.
    pub fn observe(&mut self, state: &SessionState, nav: &mut dyn Navigator) -> bool {
        match state {
            SessionState::Authenticated(_) if !self.redirected => {
                self.redirected = true;
                nav.replace(DASHBOARD_ROUTE);
                true
            }
            _ => false,
        }
    }

    pub fn has_redirected(&self) -> bool {
        self.redirected
    }
}
