//! HTTP client abstraction for testability

use async_trait::async_trait;

use crate::error::{ApiError, Result};

/// HTTP response from a request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over the HTTP client for dependency injection.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded JS event loop.
#[async_trait(?Send)]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient {
    /// Send a GET request to the given URL
    async fn get(&self, url: &str) -> Result<HttpResponse>;

    /// Send a POST request with a JSON body
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse>;
}

/// Production HTTP client using reqwest. No timeout, no retry.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    async fn finish(method: &str, url: &str, response: reqwest::Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Reading response body: {e}")))?;
        tracing::debug!("{method} {url} -> {status} ({} bytes)", body.len());
        Ok(HttpResponse { status, body })
    }
}

#[async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        tracing::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("GET {url} failed: {e}")))?;
        Self::finish("GET", url, response).await
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse> {
        tracing::debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("POST {url} failed: {e}")))?;
        Self::finish("POST", url, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A URL that will always refuse connections (port 1 is reserved and unbound)
    const UNREACHABLE_URL: &str = "http://127.0.0.1:1/api/my-ip";

    #[tokio::test]
    async fn get_connection_refused_returns_transport_error() {
        let client = ReqwestHttpClient::new();
        let err = client.get(UNREACHABLE_URL).await.unwrap_err();
        match &err {
            ApiError::Transport(msg) => {
                assert!(msg.starts_with("GET http://127.0.0.1:1/api/my-ip failed:"), "{msg}");
            }
            other => panic!("expected ApiError::Transport, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn post_connection_refused_returns_transport_error() {
        let client = ReqwestHttpClient::new();
        let body = serde_json::json!({ "ip_address": "8.8.8.8" });
        let err = client.post_json(UNREACHABLE_URL, &body).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
    }

    #[tokio::test]
    async fn relative_url_is_a_transport_error_off_the_browser() {
        let client = ReqwestHttpClient::new();
        let err = client.get("/api/my-ip").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
    }

    #[test]
    fn success_range() {
        let ok = HttpResponse { status: 204, body: String::new() };
        let redirect = HttpResponse { status: 304, body: String::new() };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
    }
}
