//! Test doubles for the IO seams.
//!
//! - [`MockHttpClient`] replays scripted responses and records requests
//! - [`MockNavigator`] counts browser launches instead of performing them

pub mod http;
pub mod navigate;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use navigate::MockNavigator;
