//! reqwest-backed user source: `GET {base_url}/{id}`.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::models::{UserId, UserRecord};
use crate::source::{FetchError, UserSource};

const USER_AGENT: &str = concat!("randuser/", env!("CARGO_PKG_VERSION"));

/// Fetches users from a JSONPlaceholder-style collection endpoint.
pub struct HttpUserSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserSource {
    /// Create a source rooted at `base_url` (trailing slashes are ignored).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a source that reuses an existing client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// URL of the record for `id`.
    pub fn user_url(&self, id: UserId) -> String {
        format!("{}/{id}", self.base_url)
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch(&self, id: UserId) -> Result<UserRecord, FetchError> {
        let url = self.user_url(id);
        debug!(%url, "fetching user");

        let resp = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(%url, error = %e, "user request failed");
                FetchError::Network(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "user endpoint returned an error status");
            return Err(FetchError::Request {
                status: status.as_u16(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Network(format!("failed to read response: {e}")))?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(%url, error = %e, "user payload did not decode");
            FetchError::Parse(e.to_string())
        })
    }
}
