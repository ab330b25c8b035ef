//! The NASA ADS API client.

use crate::config;
use crate::error::{PadsError, Result};
use crate::rate_limit::RateLimits;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("pads/", env!("CARGO_PKG_VERSION"));

/// Async client for the ADS search and export endpoints.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> pads::error::Result<()> {
/// use pads::query::Constraints;
///
/// let client = pads::AdsClient::from_env(None)?;
/// let constraints = Constraints {
///     author: Some("doe, j".to_string()),
///     ..Constraints::default()
/// };
/// let results = client.search(&constraints).await?;
/// for paper in &results.papers {
///     println!("{} {}", paper.bibcode, paper.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AdsClient {
    pub(crate) http: Client,
    pub(crate) api_token: String,
    pub(crate) base_url: String,
}

/// Body and quota headers of a successful response.
#[derive(Debug)]
pub(crate) struct Reply {
    pub body: String,
    pub rate_limits: Option<RateLimits>,
}

impl AdsClient {
    /// Create a new client with the given API token.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            api_token: api_token.into(),
            base_url: config::DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a client from the configured credentials.
    ///
    /// `token` takes precedence over the environment and `~/.ads/dev_key`;
    /// `ADS_API_URL` overrides the endpoint.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let token = config::resolve_token(token)?;
        let base_url = config::resolve_base_url()?;
        Ok(Self::new(token)?.with_base_url(base_url))
    }

    /// Override the base URL (useful for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Make an authenticated GET request to the ADS API.
    pub(crate) async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Reply> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?params, "GET");
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_token)
            .query(params)
            .send()
            .await?;

        handle_response(response).await
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<Reply> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(body)
            .send()
            .await?;

        handle_response(response).await
    }
}

/// Handle the HTTP response, mapping status codes to errors.
async fn handle_response(response: reqwest::Response) -> Result<Reply> {
    let status = response.status().as_u16();
    let rate_limits = RateLimits::from_headers(response.headers());
    tracing::debug!(status, ?rate_limits, "response");

    match status {
        200..=299 => Ok(Reply {
            body: response.text().await?,
            rate_limits,
        }),
        401 => Err(PadsError::AuthRequired),
        404 => Err(PadsError::NotFound("Resource not found".to_string())),
        429 => {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs);
            Err(PadsError::RateLimited { retry_after })
        }
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(PadsError::Api {
                status,
                message: body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::ServerGuard) -> AdsClient {
        AdsClient::new("test-token")
            .unwrap()
            .with_base_url(server.url())
    }

    #[tokio::test]
    async fn test_get_sends_bearer_token_and_reads_quota() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_header("x-ratelimit-limit", "5000")
            .with_header("x-ratelimit-remaining", "4321")
            .with_body("pong")
            .create_async()
            .await;

        let reply = client_for(&server).get("/ping", &[]).await.unwrap();
        mock.assert_async().await;
        assert_eq!(reply.body, "pong");
        let limits = reply.rate_limits.unwrap();
        assert_eq!(limits.limit, Some(5000));
        assert_eq!(limits.remaining, Some(4321));
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_auth_required() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ping")
            .with_status(401)
            .create_async()
            .await;

        let err = client_for(&server).get("/ping", &[]).await.unwrap_err();
        assert!(matches!(err, PadsError::AuthRequired));
    }

    #[tokio::test]
    async fn test_rate_limited_reads_retry_after() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ping")
            .with_status(429)
            .with_header("retry-after", "60")
            .create_async()
            .await;

        let err = client_for(&server).get("/ping", &[]).await.unwrap_err();
        match err {
            PadsError::RateLimited { retry_after } => {
                assert_eq!(retry_after, Some(Duration::from_secs(60)))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_keeps_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/export/bibtex")
            .with_status(500)
            .with_body("solr is down")
            .create_async()
            .await;

        let err = client_for(&server)
            .post_json("/export/bibtex", &serde_json::json!({}))
            .await
            .unwrap_err();
        match err {
            PadsError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "solr is down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
