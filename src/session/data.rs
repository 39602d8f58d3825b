use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the auth service.
///
/// The `id` is origin-defined and opaque to this crate; it is carried
/// around for display and logging, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub token: String,
    pub user: UserRecord,
    pub created_at: DateTime<Utc>,
    /// Expiry as reported by the auth service. The service owns expiry;
    /// when absent the session is treated as live until the service says
    /// otherwise.
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionData {
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() > expires_at,
            None => false,
        }
    }

    /// Get minutes remaining until expiry (for display)
    pub fn minutes_until_expiry(&self) -> Option<i64> {
        self.expires_at
            .map(|expires_at| (expires_at - Utc::now()).num_minutes().max(0))
    }
}

/// The session as observed by a page.
///
/// Every consumer starts at `Pending` and must not act (redirect, render
/// protected content) until hydration resolves the state one way or the
/// other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Pending,
    Authenticated(SessionData),
    Unauthenticated,
}

impl SessionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SessionState::Pending)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// The session payload, present only when authenticated
    pub fn data(&self) -> Option<&SessionData> {
        match self {
            SessionState::Authenticated(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_at: Option<DateTime<Utc>>) -> SessionData {
        SessionData {
            token: "tok-1".to_string(),
            user: UserRecord {
                id: "usr_01".to_string(),
                email: "speaker@example.com".to_string(),
                name: Some("Alex Speaker".to_string()),
            },
            created_at: Utc::now(),
            expires_at,
        }
    }

    #[test]
    fn test_session_without_expiry_is_live() {
        assert!(!session(None).is_expired());
    }

    #[test]
    fn test_session_past_expiry_is_expired() {
        let s = session(Some(Utc::now() - Duration::minutes(1)));
        assert!(s.is_expired());
        assert_eq!(s.minutes_until_expiry(), Some(0));
    }

    #[test]
    fn test_session_future_expiry_is_live() {
        let s = session(Some(Utc::now() + Duration::minutes(30)));
        assert!(!s.is_expired());
        assert!(s.minutes_until_expiry().unwrap() >= 29);
    }

    #[test]
    fn test_state_accessors() {
        assert!(SessionState::Pending.is_pending());
        assert!(!SessionState::Pending.is_authenticated());
        assert!(SessionState::Unauthenticated.data().is_none());

        let state = SessionState::Authenticated(session(None));
        assert!(state.is_authenticated());
        assert_eq!(state.data().unwrap().user.id, "usr_01");
    }
}
