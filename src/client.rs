//! Cisco Support API client.
//!
//! Low-level HTTP client that handles authentication and raw GET
//! requests. Per-family operations live on the adapter types in
//! `api`.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::auth::{Credentials, TokenManager};
use crate::error::{Result, SupportError};

const DEFAULT_API_URL: &str = "https://api.cisco.com";
const DEFAULT_TOKEN_URL: &str = "https://cloudsso.cisco.com/as/token.oauth2";
const USER_AGENT: &str = concat!("ciscosupport/", env!("CARGO_PKG_VERSION"));

/// Low-level Cisco Support API client.
///
/// Handles OAuth2 authentication and HTTP requests. Family-specific
/// operations are exposed through [`crate::CiscoSupport`] and the
/// per-family adapter types.
///
/// This struct is cheaply cloneable; clones reference the same
/// underlying connection pool and token state.
///
/// # Example
///
/// ```no_run
/// use ciscosupport::SupportClient;
///
/// # async fn example() -> ciscosupport::Result<()> {
/// // Create from environment variables
/// let client = SupportClient::from_env().await?;
///
/// // Or configure manually
/// let client = SupportClient::connect("client-id", "client-secret").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SupportClient {
    http: reqwest::Client,
    base_url: Arc<Url>,
    auth: Arc<TokenManager>,
}

impl std::fmt::Debug for SupportClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupportClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl SupportClient {
    /// Create a client from environment variables.
    ///
    /// Uses `CS_API_KEY` and `CS_API_SECRET` for the client-credentials
    /// grant, and optionally `CS_API_URL` / `CS_TOKEN_URL` to override
    /// the API origin and token endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is not set or the
    /// initial token grant fails.
    pub async fn from_env() -> Result<Self> {
        let client_id = env::var("CS_API_KEY").map_err(|_| {
            SupportError::ConfigMissing("CS_API_KEY environment variable not set".to_string())
        })?;
        let client_secret = env::var("CS_API_SECRET").map_err(|_| {
            SupportError::ConfigMissing("CS_API_SECRET environment variable not set".to_string())
        })?;

        let base_url = env::var("CS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let token_url = env::var("CS_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string());

        Self::with_urls(
            Credentials::new(client_id, client_secret),
            &base_url,
            &token_url,
        )
        .await
    }

    /// Establish a session against the production API endpoints.
    ///
    /// Performs the initial client-credentials grant; the session holds
    /// a valid bearer token when this returns.
    ///
    /// # Errors
    ///
    /// Returns [`SupportError::Authentication`] if the identity
    /// provider rejects the credentials.
    pub async fn connect(client_id: &str, client_secret: &str) -> Result<Self> {
        Self::with_urls(
            Credentials::new(client_id, client_secret),
            DEFAULT_API_URL,
            DEFAULT_TOKEN_URL,
        )
        .await
    }

    /// Establish a session against explicit API and token endpoints.
    pub async fn with_urls(
        credentials: Credentials,
        base_url: &str,
        token_url: &str,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let token_url = Url::parse(token_url)?;

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(SupportError::Http)?;

        let auth = TokenManager::new(http.clone(), token_url, credentials);

        let client = Self {
            http,
            base_url: Arc::new(base_url),
            auth: Arc::new(auth),
        };

        // Fetch the initial token so credential problems surface here
        // rather than on the first API call.
        client.auth.token().await?;

        Ok(client)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make an authenticated GET request and parse the JSON body.
    ///
    /// Query parameters with a `None` value are omitted; the rest are
    /// sent in the given order.
    #[tracing::instrument(skip(self, params))]
    pub(crate) async fn get_json(
        &self,
        path: &str,
        params: &[(String, Option<String>)],
    ) -> Result<Value> {
        let url = self.base_url.join(path)?;

        let query: Vec<(&str, &str)> = params
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (key.as_str(), v)))
            .collect();

        let token = self.auth.token().await?;

        let mut request = self.http.get(url).bearer_auth(token);
        if !query.is_empty() {
            request = request.query(&query);
        }

        let response = request.send().await.map_err(SupportError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SupportError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<Value>().await.map_err(SupportError::Http)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_failure_is_authentication_error() {
        // Construction without a reachable token endpoint must surface
        // as an authentication error, not a transport error.
        let result = SupportClient::with_urls(
            Credentials::new("id", "secret"),
            "https://api.example.com",
            "http://127.0.0.1:9/token",
        )
        .await;

        match result {
            Err(SupportError::Authentication(_)) => {}
            other => panic!("expected Authentication error, got {other:?}"),
        }
    }
}
