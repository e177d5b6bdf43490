//! Remote suggestion service client
//!
//! Defines the wire schema, the RemoteError taxonomy, and the
//! SuggestionClient enum the orchestrator talks through. Uses reqwest with a
//! per-request timeout and CancellationToken support; every request resolves
//! to exactly one of success, structured error, network failure, or timeout.

use std::time::Duration;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::config::RemoteConfig;

/// Errors that can occur while fetching remote suggestions
///
/// None of these reach the UI: the orchestrator converts every variant except
/// `Cancelled` into local fallback suggestions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RemoteError {
    /// The service returned a structured error response
    #[error("suggestion service error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Transport-level failure (DNS, connect, TLS, broken stream)
    #[error("network error: {0}")]
    Network(String),

    /// The bounded request deadline elapsed
    #[error("request timed out")]
    Timeout,

    /// The response body did not match the wire schema
    #[error("malformed response: {0}")]
    Parse(String),

    /// The request was cancelled
    #[error("request cancelled")]
    Cancelled,
}

/// Request body for `POST /v1/reply`
#[derive(Debug, Clone, Serialize)]
pub struct ReplyRequest {
    pub context: String,
    pub tone: String,
    pub language_mode: String,
    pub count: u32,
}

/// Request body for `POST /v1/rewrite`
#[derive(Debug, Clone, Serialize)]
pub struct RewriteRequest {
    pub text: String,
    pub tone: String,
    pub language_mode: String,
    pub count: u32,
}

/// Response body for `POST /v1/reply`
#[derive(Debug, Deserialize)]
pub struct ReplyResponse {
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub language_used: Option<String>,
}

/// Response body for `POST /v1/rewrite`
#[derive(Debug, Deserialize)]
pub struct RewriteResponse {
    pub rewrites: Vec<String>,
    #[serde(default)]
    pub language_used: Option<String>,
}

/// Error body the service sends with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Suggestion service client used by the orchestrator
///
/// Enum rather than a trait object so the test double lives next to the real
/// client without touching the orchestrator's shape.
#[derive(Debug, Clone)]
pub enum SuggestionClient {
    /// HTTP client against the real service
    Http(HttpSuggestionClient),
    /// Deterministic in-process double for orchestrator tests
    #[cfg(test)]
    Mock(mock::MockClient),
}

impl SuggestionClient {
    /// Fetch reply suggestions for the given conversation context.
    pub async fn fetch_replies(
        &self,
        request: &ReplyRequest,
        remote: &RemoteConfig,
        token: &CancellationToken,
    ) -> Result<Vec<String>, RemoteError> {
        match self {
            SuggestionClient::Http(client) => {
                let response: ReplyResponse = client.post_json("reply", request, remote, token).await?;
                if let Some(lang) = &response.language_used {
                    log::debug!("reply service answered in {lang}");
                }
                Ok(response.suggestions)
            }
            #[cfg(test)]
            SuggestionClient::Mock(client) => client.fetch(&request.context, token).await,
        }
    }

    /// Fetch rewrite suggestions for the given text.
    pub async fn fetch_rewrites(
        &self,
        request: &RewriteRequest,
        remote: &RemoteConfig,
        token: &CancellationToken,
    ) -> Result<Vec<String>, RemoteError> {
        match self {
            SuggestionClient::Http(client) => {
                let response: RewriteResponse =
                    client.post_json("rewrite", request, remote, token).await?;
                if let Some(lang) = &response.language_used {
                    log::debug!("rewrite service answered in {lang}");
                }
                Ok(response.rewrites)
            }
            #[cfg(test)]
            SuggestionClient::Mock(client) => client.fetch(&request.text, token).await,
        }
    }
}

/// HTTP client for the suggestion service
///
/// Base URL, bearer credential, and timeout come from the config snapshot the
/// orchestrator takes per call, so settings changes apply to the next request
/// without rebuilding the client.
#[derive(Debug, Clone)]
pub struct HttpSuggestionClient {
    client: reqwest::Client,
}

impl HttpSuggestionClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// POST a JSON body to `{base_url}/v1/{endpoint}` and parse the response.
    ///
    /// Races the request against the cancellation token; the token side wins
    /// ties so cancellation is observed promptly.
    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        remote: &RemoteConfig,
        token: &CancellationToken,
    ) -> Result<R, RemoteError> {
        if token.is_cancelled() {
            return Err(RemoteError::Cancelled);
        }

        let url = format!("{}/v1/{}", remote.base_url.trim_end_matches('/'), endpoint);
        let mut builder = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(remote.timeout_secs))
            .json(body);
        if let Some(key) = &remote.api_key {
            builder = builder.bearer_auth(key);
        }

        tokio::select! {
            biased;

            _ = token.cancelled() => Err(RemoteError::Cancelled),
            result = Self::execute::<R>(builder) => result,
        }
    }

    async fn execute<R: DeserializeOwned>(
        builder: reqwest::RequestBuilder,
    ) -> Result<R, RemoteError> {
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                RemoteError::Timeout
            } else {
                RemoteError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                RemoteError::Timeout
            } else {
                RemoteError::Network(e.to_string())
            }
        })?;

        if !status.is_success() {
            // Prefer the structured error body, fall back to the raw text
            let message = match serde_json::from_str::<ErrorBody>(&text) {
                Ok(body) => match body.code {
                    Some(code) => format!("{} [{}]", body.error, code),
                    None => body.error,
                },
                Err(_) => text,
            };
            return Err(RemoteError::Api {
                code: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(|e| RemoteError::Parse(e.to_string()))
    }
}

impl Default for HttpSuggestionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// Controllable stand-in for the HTTP client.
    ///
    /// Echoes the request text back after a configurable delay so tests can
    /// overlap requests and observe which one wins.
    #[derive(Debug, Clone)]
    pub struct MockClient {
        pub delay: Duration,
        pub fail: bool,
    }

    impl MockClient {
        pub fn instant() -> Self {
            Self {
                delay: Duration::ZERO,
                fail: false,
            }
        }

        pub fn slow(delay: Duration) -> Self {
            Self { delay, fail: false }
        }

        pub fn failing() -> Self {
            Self {
                delay: Duration::ZERO,
                fail: true,
            }
        }

        pub async fn fetch(
            &self,
            text: &str,
            token: &CancellationToken,
        ) -> Result<Vec<String>, RemoteError> {
            tokio::select! {
                biased;

                _ = token.cancelled() => return Err(RemoteError::Cancelled),
                _ = tokio::time::sleep(self.delay) => {}
            }
            if self.fail {
                return Err(RemoteError::Network("mock connection refused".to_string()));
            }
            Ok(vec![
                format!("re: {text}"),
                format!("about: {text}"),
                format!("more on: {text}"),
            ])
        }
    }
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod remote_tests;
