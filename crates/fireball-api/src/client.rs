//! HTTP client for the NASA/JPL Fireball Data API.
//!
//! Wraps `reqwest` with the API's query-string conventions and typed error
//! handling. Every call is a single GET; there is no retry and no caching.

use std::time::Duration;

use fireball_core::QueryParams;
use reqwest::{Client, Url};

use crate::error::ApiError;
use crate::types::RawPayload;

const DEFAULT_BASE_URL: &str = fireball_core::app_config::DEFAULT_API_URL;

/// Serializes filter parameters into the API's query-string form.
///
/// Underscores in parameter names become hyphens (`date_min` → `date-min`),
/// pairs are joined with `&` in insertion order, and no trailing separator is
/// emitted. Values are passed through verbatim.
#[must_use]
pub fn build_query(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(name, value)| format!("{}={value}", name.replace('_', "-")))
        .collect::<Vec<_>>()
        .join("&")
}

/// Client for the Fireball Data API.
///
/// Use [`FireballClient::new`] for production or
/// [`FireballClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct FireballClient {
    client: Client,
    base_url: Url,
}

impl FireballClient {
    /// Creates a client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, user_agent)
    }

    /// Creates a client with a custom endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Full request URL for `params`. Any query already present on the base
    /// URL is replaced.
    #[must_use]
    pub fn request_url(&self, params: &QueryParams) -> Url {
        let mut url = self.base_url.clone();
        let query = build_query(params);
        url.set_query((!query.is_empty()).then_some(query.as_str()));
        url
    }

    /// Fetches the fireball table matching `params`.
    ///
    /// An empty result set (including a `null` body) is not an error here:
    /// the returned payload simply reports [`RawPayload::is_empty`].
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] on network failure or timeout.
    /// - [`ApiError::HttpStatus`] on a non-2xx status.
    /// - [`ApiError::Format`] if the body is not the expected JSON table.
    pub async fn fetch(&self, params: &QueryParams) -> Result<RawPayload, ApiError> {
        let url = self.request_url(params);
        tracing::debug!(%url, "requesting fireball records");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(%url, error = %e, "failed to read error response body");
                    String::new()
                }
            };
            let message = api_error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string()
            });
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        // A bare `null` body means the API has nothing to report.
        let payload = serde_json::from_str::<Option<RawPayload>>(&body)
            .map_err(|e| ApiError::Format {
                context: url.to_string(),
                reason: e.to_string(),
            })?
            .unwrap_or_default();
        payload.check_shape().map_err(|reason| ApiError::Format {
            context: url.to_string(),
            reason,
        })?;

        tracing::debug!(
            rows = payload.rows().len(),
            count = payload.count.as_deref().unwrap_or("?"),
            "received fireball records"
        );
        Ok(payload)
    }
}

/// Extracts the `"message"` field the API puts in its error bodies.
fn api_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
