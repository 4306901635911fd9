use serde_json::Value;
use tracing::debug;

use crate::errors::{ApiError, ServerErrorKind};

pub use reqwest::Method;

/// Decoded 2xx response: status plus the JSON body (`Null` when the body
/// was empty).
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Value,
}

/// Thin transport over the configured base URL: one attempt per call, no
/// retries, no client-side timeout.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http: reqwest::Client::new(), base_url }
    }

    pub fn from_config(cfg: &configs::ApiConfig) -> Self {
        Self::new(cfg.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request. A JSON body sets `Content-Type: application/json`;
    /// a token sets `Authorization: Bearer <token>`.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            let kind = ServerErrorKind::classify(status, &text);
            debug!(%method, %url, status, ?kind, "server rejected request");
            return Err(ApiError::Server { status, kind, message: text });
        }

        let data = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))?
        };
        debug!(%method, %url, status, "request ok");
        Ok(ApiResponse { status, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slashes() {
        let client = ApiClient::new("http://127.0.0.1:8000//");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }
}
