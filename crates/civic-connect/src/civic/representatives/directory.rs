//! Outbound access to the third-party civic information service.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::CivicApiConfig;

/// Failure modes of a single directory call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// The service answered with a non-success status.
    #[error("civic api responded with status {status}")]
    Rejected { status: u16, body: String },
    /// No usable answer: connection failure, timeout, or an undecodable body.
    #[error("civic api unavailable: {0}")]
    Unavailable(String),
}

/// Source of raw `{ offices, officials }` documents for a location term.
#[async_trait]
pub trait CivicDirectory: Send + Sync {
    async fn representatives(&self, term: &str) -> Result<Value, DirectoryError>;
}

/// `reqwest` client for the Google Civic Information representatives endpoint.
#[derive(Clone)]
pub struct GoogleCivicClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl GoogleCivicClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            endpoint: format!("{}/representatives", base_url.trim_end_matches('/')),
        })
    }

    /// Builds a client only when a credential is configured.
    pub fn from_config(config: &CivicApiConfig) -> Result<Option<Self>, reqwest::Error> {
        config
            .api_key
            .as_ref()
            .map(|key| Self::new(key.clone(), &config.base_url, config.timeout))
            .transpose()
    }
}

impl std::fmt::Debug for GoogleCivicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleCivicClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CivicDirectory for GoogleCivicClient {
    async fn representatives(&self, term: &str) -> Result<Value, DirectoryError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("key", self.api_key.as_str()), ("address", term)])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| DirectoryError::Unavailable(err.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|err| DirectoryError::Unavailable(err.without_url().to_string()))?;
            return Err(DirectoryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| DirectoryError::Unavailable(err.without_url().to_string()))
    }
}
