//! OAuth2 client-credentials token management.
//!
//! The token manager owns the bearer token for a session: it fetches
//! one when the session is established and replaces it lazily once it
//! expires. Refresh is serialized behind an async mutex so concurrent
//! traversals sharing a session never race duplicate grants.

use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use url::Url;

use crate::error::{Result, SupportError};

/// Expiry buffer: a token within this window of its expiry is treated
/// as already expired.
const EXPIRY_BUFFER_SECS: i64 = 30;

/// OAuth2 client credentials for the client-credentials grant.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

/// Wire shape of a token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[allow(dead_code)]
    token_type: Option<String>,
    expires_in: Option<i64>,
}

/// A bearer token with its absolute expiry.
#[derive(Debug, Clone)]
struct BearerToken {
    access_token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl BearerToken {
    fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() + Duration::seconds(EXPIRY_BUFFER_SECS) >= expires_at,
            None => false,
        }
    }
}

/// Owns and refreshes the session's bearer token.
pub struct TokenManager {
    http: Client,
    token_url: Url,
    credentials: Credentials,
    current: Mutex<Option<BearerToken>>,
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("token_url", &self.token_url.as_str())
            .finish_non_exhaustive()
    }
}

impl TokenManager {
    pub fn new(http: Client, token_url: Url, credentials: Credentials) -> Self {
        Self {
            http,
            token_url,
            credentials,
            current: Mutex::new(None),
        }
    }

    /// Return a valid bearer token, performing the client-credentials
    /// grant if none is held or the held token is expired.
    ///
    /// # Errors
    ///
    /// Returns [`SupportError::Authentication`] if the identity
    /// provider rejects the credentials or the grant request fails.
    pub async fn token(&self) -> Result<String> {
        let mut current = self.current.lock().await;

        if let Some(token) = current.as_ref() {
            if !token.is_expired() {
                return Ok(token.access_token.clone());
            }
            tracing::debug!("bearer token expired, refreshing");
        }

        let fresh = self.fetch().await?;
        let access_token = fresh.access_token.clone();
        *current = Some(fresh);

        Ok(access_token)
    }

    /// Perform the client-credentials grant against the token endpoint.
    async fn fetch(&self) -> Result<BearerToken> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(self.token_url.clone())
            .form(&form)
            .send()
            .await
            .map_err(|e| SupportError::Authentication(format!("token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SupportError::Authentication(format!(
                "token endpoint returned HTTP {status}: {body}"
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| SupportError::Authentication(format!("malformed token response: {e}")))?;

        let expires_at = token
            .expires_in
            .map(|secs| Utc::now() + Duration::seconds(secs));

        Ok(BearerToken {
            access_token: token.access_token,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_with_future_expiry_is_valid() {
        let token = BearerToken {
            access_token: "t".to_string(),
            expires_at: Some(Utc::now() + Duration::seconds(3600)),
        };
        assert!(!token.is_expired());
    }

    #[test]
    fn test_token_inside_expiry_buffer_is_expired() {
        let token = BearerToken {
            access_token: "t".to_string(),
            expires_at: Some(Utc::now() + Duration::seconds(EXPIRY_BUFFER_SECS - 5)),
        };
        assert!(token.is_expired());
    }

    #[test]
    fn test_token_without_expiry_never_expires() {
        let token = BearerToken {
            access_token: "t".to_string(),
            expires_at: None,
        };
        assert!(!token.is_expired());
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("my-id", "my-secret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("my-id"));
        assert!(!debug.contains("my-secret"));
    }
}
