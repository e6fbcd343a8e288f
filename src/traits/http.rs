//! The HTTP seam.
//!
//! The newsletter submission is the one network interaction the page has, and
//! it goes through this trait so tests can swap in a scripted client.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

/// Header names and values as a plain map.
pub type Headers = HashMap<String, String>;

/// Status, headers and body of a completed request.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self::with_headers(status, Headers::new(), body)
    }

    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }

    /// Body decoded as UTF-8 text.
    pub fn text(&self) -> Result<String, std::str::Utf8Error> {
        std::str::from_utf8(&self.body).map(str::to_owned)
    }
}

/// Failures a request can come back with.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Other(String),
}

impl HttpError {
    /// Whether retrying the same request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, HttpError::ConnectionFailed(_) | HttpError::Timeout(_))
    }

    /// Short message for the status bar. Page copy is Dutch, so this is too.
    pub fn user_message(&self) -> &'static str {
        match self {
            HttpError::ConnectionFailed(_) => "Geen verbinding met de server.",
            HttpError::Timeout(_) => "De server reageert niet, probeer het later opnieuw.",
            HttpError::InvalidUrl(_) => "Ongeldige server-instelling.",
            HttpError::Other(_) => "Versturen is niet gelukt.",
        }
    }
}

/// Outgoing HTTP, narrowed to the one POST the page needs.
///
/// Implementations include the production reqwest-based client and a
/// recording mock for tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a POST request with a pre-encoded body.
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError>;
}
