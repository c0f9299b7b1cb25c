//! # amep-client
//!
//! HTTP client for the AMEP REST API.
//!
//! Endpoint groups:
//! - classrooms: teacher classroom listing
//! - projects: project listing, detail retrieval (normalized at this
//!   boundary), and creation
//! - engagement: student analysis and class-level rollups
//! - polls: live poll creation, answering, and results
//!
//! The four project-workspace operations are also exposed behind the
//! [`ProjectService`] trait so orchestration code can run against a test
//! double instead of a live backend.

mod classrooms;
mod engagement;
mod error;
mod http;
mod polls;
mod projects;
mod service;

pub use error::ServiceError;
pub use service::ProjectService;

use std::time::Duration;

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the AMEP REST API.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create a client for the service at `base_url` (up to and including
    /// `/api`), with the default timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit per-request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("amep/0.1")
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = ServiceClient::new("http://127.0.0.1:5000/api/");
        assert_eq!(client.base_url, "http://127.0.0.1:5000/api");
    }

    #[test]
    fn base_url_without_slash_is_kept() {
        let client = ServiceClient::new("https://amep.example.edu/api");
        assert_eq!(client.base_url, "https://amep.example.edu/api");
    }
}
