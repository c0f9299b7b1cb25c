//! Shared HTTP response helpers for the service client.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success -> [`ServiceError::Api`] with envelope decoding) so
//! endpoint modules stay focused on request construction and response
//! mapping.

use serde::Deserialize;

use crate::error::ServiceError;

/// Error envelope the service attaches to non-2xx responses.
///
/// Handlers are inconsistent: framework-level errors carry both `error` and
/// `message`, route handlers often send only `error`.
#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** -> [`ServiceError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** -> [`ServiceError::Api`] with status code and
///   the most specific message the error envelope offers.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(ServiceError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(ServiceError::Api {
            status,
            message: api_message(&body),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Extract the most specific error message from a response body.
///
/// Prefers the envelope's `message`, then `error`, then the raw body.
fn api_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        if let Some(message) = envelope.message {
            return message;
        }
        if let Some(error) = envelope.error {
            return error;
        }
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body(String::new())
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_missing_header() {
        let resp = mock_response(429, "");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "not-a-number");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[test]
    fn api_message_prefers_envelope_message() {
        let body = r#"{"success": false, "error": "Not Found", "message": "The requested resource could not be found.", "status_code": 404}"#;
        assert_eq!(
            api_message(body),
            "The requested resource could not be found."
        );
    }

    #[test]
    fn api_message_falls_back_to_error_field() {
        // Route handlers often send only {"error": ...}.
        let body = r#"{"error": "classroom not found"}"#;
        assert_eq!(api_message(body), "classroom not found");
    }

    #[test]
    fn api_message_falls_back_to_raw_body() {
        assert_eq!(api_message("<html>bad gateway</html>"), "<html>bad gateway</html>");
    }

    #[tokio::test]
    async fn check_response_rate_limited_with_header() {
        let resp = mock_response_with_retry_after(429, "30");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn check_response_rate_limited_default() {
        let resp = mock_response_with_retry_after(429, "soon");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn check_response_decodes_error_envelope() {
        let body = r#"{"success": false, "error": "Internal Server Error", "message": "An unexpected error occurred. Please try again later.", "status_code": 500}"#;
        let err = check_response(mock_response(500, body)).await.unwrap_err();
        match err {
            ServiceError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(
                    message,
                    "An unexpected error occurred. Please try again later."
                );
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }
}
