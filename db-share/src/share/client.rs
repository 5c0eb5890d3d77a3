//! bahn.de share endpoint client.

use tracing::debug;

use super::error::ShareError;
use super::types::{SharePayload, ShareResponse};

/// Default base URL for the share endpoint.
const DEFAULT_BASE_URL: &str = "https://int.bahn.de";

/// Path of the share endpoint below the base URL.
const SHARE_PATH: &str = "/web/api/angebote/verbindung/teilen";

/// How much of an error or unparseable body to keep in the error.
const MAX_ERROR_BODY: usize = 500;

/// Configuration for the share client.
#[derive(Debug, Clone)]
pub struct ShareConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds; `None` keeps the transport default
    pub timeout_secs: Option<u64>,
}

impl ShareConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Client for the bahn.de connection-sharing endpoint.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ShareClient {
    http: reqwest::Client,
    base_url: String,
}

impl ShareClient {
    /// Create a new share client.
    pub fn new(config: ShareConfig) -> Result<Self, ShareError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client against the production endpoint.
    pub fn default_client() -> Result<Self, ShareError> {
        Self::new(ShareConfig::default())
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SHARE_PATH)
    }

    /// Post a payload and return the `vbid` the endpoint hands back.
    ///
    /// Makes exactly one request. Any transport failure, non-success status
    /// or body without a string `vbid` is an error.
    pub async fn request_vbid(&self, payload: &SharePayload) -> Result<String, ShareError> {
        let url = self.endpoint();
        let has_date = matches!(payload.hinfahrt_datum, Some(Some(_)));
        debug!(%url, has_date, "requesting share id");

        let response = self.http.post(&url).json(payload).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ShareError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ShareError::Api {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let body = response.text().await?;

        let response: ShareResponse =
            serde_json::from_str(&body).map_err(|e| ShareError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(MAX_ERROR_BODY).collect()),
            })?;

        Ok(response.vbid)
    }
}
