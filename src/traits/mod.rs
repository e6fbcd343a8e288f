//! The seams between page behavior and the outside world.
//!
//! - [`HttpClient`] carries the newsletter POST
//! - [`Navigator`] opens the native browser fallback

pub mod http;
pub mod navigate;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use navigate::Navigator;
