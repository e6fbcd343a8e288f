//! Scripted HTTP client for tests.
//!
//! Stands in for the real network: every POST is recorded, and the reply
//! comes from a small script of URL-prefix rules set up by the test.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// One request exactly as the client saw it, kept for assertions.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
    pub body: String,
}

/// What a scripted URL should produce.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

/// Rules, fallback and request log, shared by every clone of the client.
#[derive(Debug, Default)]
struct Script {
    rules: Vec<(String, MockResponse)>,
    fallback: Option<MockResponse>,
    log: Vec<RecordedRequest>,
}

/// HTTP client that replays a script instead of touching the network.
///
/// Clones share one script and one log, so a test keeps a handle for
/// assertions while the app owns the copy it talks through.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    script: Arc<Mutex<Script>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a reply for URLs starting with `prefix`.
    ///
    /// Rules are checked in insertion order and the first match wins.
    pub fn set_response(&self, prefix: &str, response: MockResponse) {
        let mut script = self.script.lock().unwrap();
        script.rules.push((prefix.to_string(), response));
    }

    /// Script the reply for any URL no rule covers.
    pub fn set_default_response(&self, response: MockResponse) {
        self.script.lock().unwrap().fallback = Some(response);
    }

    /// Every request made so far, oldest first.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.script.lock().unwrap().log.clone()
    }

    fn reply_for(&self, url: &str) -> Option<MockResponse> {
        let script = self.script.lock().unwrap();
        script
            .rules
            .iter()
            .find(|(prefix, _)| url.starts_with(prefix.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| script.fallback.clone())
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.script.lock().unwrap().log.push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
            body: body.to_string(),
        });

        match self.reply_for(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("no scripted reply for {url}"))),
        }
    }
}
