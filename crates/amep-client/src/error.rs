//! Service client error types.

use thiserror::Error;

/// Errors that can occur when calling the AMEP REST API.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Message from the service's error envelope, or the raw body.
        message: String,
    },

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited; retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}
