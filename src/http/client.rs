//! HTTP client wrapping reqwest with error classification.

use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::io::Write;

use super::status::{check_status, status_hint};
use crate::config::VERSION;
use crate::error::FetchError;

/// HTTP client used for both the API listing and the asset download.
///
/// Each request is attempted exactly once; a failure ends the run.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client that identifies itself as this tool.
    /// GitHub rejects API requests without a User-Agent.
    pub fn with_user_agent() -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("hamlib-fetch/{}", VERSION))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::new(client))
    }

    /// Performs a GET request with extra headers and deserializes the JSON body.
    #[tracing::instrument(skip(self, headers))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Connection(format!("GET {}: {}", url, e)))?;

        let response = check_status(response).inspect_err(log_hint)?;

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Connection(format!("reading body of {}: {}", url, e)))?;

        let result = serde_json::from_slice::<T>(&body)
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        Ok(result)
    }

    /// Downloads a file from a URL, streaming it into the writer produced by
    /// `create_writer`. The writer is only created once the server has
    /// answered with a success status. Returns the number of bytes written.
    #[tracing::instrument(skip(self, create_writer))]
    pub async fn download_file<W, F>(&self, url: &str, create_writer: F) -> Result<u64>
    where
        W: Write,
        F: FnOnce() -> Result<W>,
    {
        debug!("Downloading file from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Connection(format!("GET {}: {}", url, e)))?;

        let mut response = check_status(response).inspect_err(log_hint)?;

        let mut writer = create_writer()?;
        let mut downloaded_bytes: u64 = 0;

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| FetchError::Connection(format!("download of {} interrupted: {}", url, e)))?
        {
            writer
                .write_all(&chunk)
                .context("Failed to write chunk to file")?;
            downloaded_bytes += chunk.len() as u64;
        }
        writer.flush().context("Failed to flush downloaded file")?;

        debug!(
            "Downloaded {:.2} MB",
            downloaded_bytes as f64 / (1024.0 * 1024.0)
        );

        Ok(downloaded_bytes)
    }
}

fn log_hint(err: &FetchError) {
    if let FetchError::Http { status, .. } = err
        && let Some(hint) = status_hint(*status)
    {
        warn!("{}: {}", err, hint);
    }
}
