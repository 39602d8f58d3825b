//! HTTP client for the StagePass authentication service.
//!
//! The service exposes email/password sign-in and sign-up, a bearer-token
//! session query, and sign-out, all under a single base URL. Responses
//! carry the user record and token; expiry is owned by the service and
//! only echoed back here.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::session::{SessionData, UserRecord};

use super::{ApiError, AuthApi};

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
    user: ApiUser,
    #[serde(rename = "expiresAt")]
    expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    id: String,
    email: String,
    name: Option<String>,
}

/// Envelope returned by the session query endpoint. The service returns
/// a JSON `null` body when no session exists for the token.
#[derive(Debug, Deserialize)]
struct SessionEnvelope {
    session: ApiSession,
    user: ApiUser,
}

#[derive(Debug, Deserialize)]
struct ApiSession {
    token: String,
    #[serde(rename = "expiresAt")]
    expires_at: Option<DateTime<Utc>>,
}

impl From<ApiUser> for UserRecord {
    fn from(user: ApiUser) -> Self {
        UserRecord {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

/// Client for the StagePass auth service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn post_credentials<B: Serialize>(&self, path: &str, body: &B) -> Result<SessionData> {
        let url = self.endpoint(path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        let response = Self::check_response(response).await?;

        let auth: AuthResponse = response
            .json()
            .await
            .context("Failed to parse auth response")?;

        Ok(SessionData {
            token: auth.token,
            user: auth.user.into(),
            created_at: Utc::now(),
            expires_at: auth.expires_at,
        })
    }
}

impl AuthApi for AuthClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionData> {
        self.post_credentials("sign-in/email", &SignInRequest { email, password })
            .await
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<SessionData> {
        self.post_credentials(
            "sign-up/email",
            &SignUpRequest {
                email,
                password,
                name,
            },
        )
        .await
    }

    async fn fetch_session(&self, token: &str) -> Result<Option<SessionData>> {
        let url = self.endpoint("get-session");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .context("Failed to send session query")?;

        // An unrecognized token is an unauthenticated session, not a failure
        if response.status().as_u16() == 401 {
            return Ok(None);
        }

        let response = Self::check_response(response).await?;

        let envelope: Option<SessionEnvelope> = response
            .json()
            .await
            .context("Failed to parse session response")?;

        Ok(envelope.map(|env| SessionData {
            token: env.session.token,
            user: env.user.into(),
            created_at: Utc::now(),
            expires_at: env.session.expires_at,
        }))
    }

    async fn sign_out(&self, token: &str) -> Result<()> {
        let url = self.endpoint("sign-out");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .send()
            .await
            .context("Failed to send sign-out request")?;

        Self::check_response(response).await?;
        Ok(())
    }
}
