//! Production IO behind the [`crate::traits`] seams.
//!
//! - [`ReqwestHttpClient`] posts the newsletter form over the network
//! - [`SystemBrowser`] opens the signup page when the form falls back
//!
//! The [`mock`] submodule provides test doubles for both.

pub mod browser;
pub mod mock;
pub mod reqwest_http;

pub use browser::SystemBrowser;
pub use mock::{MockHttpClient, MockNavigator};
pub use reqwest_http::ReqwestHttpClient;
