//! Errors raised while talking to the GhostTrack API.

use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Input was empty after trimming; no request was sent.
    #[error("input is empty")]
    EmptyInput,

    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a non-2xx status.
    #[error("API returned HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    /// A 2xx body that is not JSON.
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Error body produced by the API: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl ApiError {
    /// Build a status error, pulling a string `detail` out of the body if there is one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .and_then(|d| match d {
                serde_json::Value::String(s) if !s.is_empty() => Some(s),
                _ => None,
            });
        ApiError::Status { status, detail }
    }

    /// Message shown to the user: the API's `detail` when present, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string_is_extracted() {
        let err = ApiError::from_status(400, r#"{"detail":"invalid ip"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                detail: Some("invalid ip".into())
            }
        );
        assert_eq!(err.user_message("fallback"), "invalid ip");
    }

    #[test]
    fn missing_detail_uses_fallback() {
        let err = ApiError::from_status(404, r#"{"error":"nope"}"#);
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn non_string_detail_uses_fallback() {
        // FastAPI validation errors carry a list of problems
        let body = r#"{"detail":[{"loc":["body","ip_address"],"msg":"bad"}]}"#;
        let err = ApiError::from_status(422, body);
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn non_json_body_uses_fallback() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn transport_error_uses_fallback() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.user_message("Failed to get IP"), "Failed to get IP");
    }
}
