use crate::core::error::FetchError;
use crate::directory::batch::DirectoryFetch;
use crate::models::user::UserRecord;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{debug, error, info};

/// Client for the external user directory endpoint
///
/// The base URL is injected so tests can point the client at a local stub
/// server instead of the real API.
pub struct DirectoryClient {
    client: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Fetch the user directory, falling back to the mock batch on any
    /// failure. Never fails: every outcome is a renderable batch.
    ///
    /// One best-effort request per call; no retries, no caching.
    pub async fn fetch_directory(&self) -> DirectoryFetch {
        debug!(base_url = %self.base_url, "Fetching users");

        match self.fetch_live().await {
            Ok(records) => {
                let fetch = DirectoryFetch::live(records);
                info!(users = fetch.records.len(), "Loaded users from directory API");
                fetch
            }
            Err(err) => {
                error!(
                    error = %err.diagnostic(),
                    "Directory fetch failed, substituting mock batch"
                );
                DirectoryFetch::fallback(&err)
            }
        }
    }

    /// Issue the single GET and interpret the outcome
    async fn fetch_live(&self) -> std::result::Result<Vec<UserRecord>, FetchError> {
        let url = format!("{}/users", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                code: status.as_u16(),
            });
        }

        response
            .json::<Vec<UserRecord>>()
            .await
            .map_err(FetchError::transport)
    }
}
