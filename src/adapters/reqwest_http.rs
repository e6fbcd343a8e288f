//! HTTP adapter backed by reqwest.
//!
//! The production [`HttpClient`]. Every request carries an overall timeout so
//! a stalled submit surfaces as [`HttpError::Timeout`] instead of leaving the
//! form in flight forever.

use std::time::Duration;

use async_trait::async_trait;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Upper bound on a whole request, connect time included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// [`HttpClient`] over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Build a client with the standard request timeout.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    /// Wrap an existing `reqwest::Client`, keeping its timeouts and TLS setup.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers.iter().fold(
            self.client.post(url).body(body.to_string()),
            |request, (name, value)| request.header(name, value),
        );

        let response = request.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.bytes().await.map_err(classify)?;

        Ok(Response::with_headers(status, headers, body))
    }
}

/// Map a transport error onto the [`HttpError`] the form layer retries on.
fn classify(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout(err.to_string())
    } else if err.is_connect() {
        HttpError::ConnectionFailed(err.to_string())
    } else if err.is_builder() {
        HttpError::InvalidUrl(err.to_string())
    } else {
        HttpError::Other(err.to_string())
    }
}

/// Copy response headers into [`Headers`], skipping values that are not
/// valid UTF-8. Names come back lowercased.
fn collect_headers(map: &reqwest::header::HeaderMap) -> Headers {
    let mut headers = Headers::new();
    for (name, value) in map {
        if let Ok(value) = value.to_str() {
            headers.insert(name.to_string(), value.to_string());
        }
    }
    headers
}
