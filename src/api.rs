// API client module: a small blocking HTTP client that creates users on the
// remote users API. One reqwest client is built up front and reused for
// every record of the run.

use crate::config::Config;
use crate::error::TransportError;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

const APPLICATION_JSON: &str = "application/json";

/// Sends one already-serialized user and returns the raw response body.
///
/// The status code is never inspected: a 4xx or 5xx body is returned the
/// same way as a 201 one. Only transport failures are errors.
pub trait Transport {
    fn create(&self, payload: Vec<u8>) -> Result<String, TransportError>;
}

/// reqwest-backed [`Transport`] that POSTs to a fixed endpoint.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
}

impl ApiClient {
    /// Build the shared client for `config.endpoint`. reqwest's default
    /// timeout is replaced by `config.request_timeout` (none by default).
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl Transport for ApiClient {
    fn create(&self, payload: Vec<u8>) -> Result<String, TransportError> {
        let request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .body(payload)
            .build()
            .map_err(|e| TransportError::Request(e.into()))?;

        let response = self
            .client
            .execute(request)
            .map_err(|e| TransportError::Send(e.into()))?;
        tracing::debug!(status = %response.status(), endpoint = %self.endpoint, "received response");

        // `text` consumes the response, so the connection is released here
        // whether or not reading succeeds.
        response.text().map_err(|e| TransportError::Body(e.into()))
    }
}
