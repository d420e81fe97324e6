//! Low-level HTTP client — `HttpClient`.
//!
//! The single entry point for every backend call. Attaches the bearer token,
//! enforces the request timeout, normalizes all failures into [`HttpError`],
//! and logs each request/response. Domain sub-clients wrap this.

use crate::error::HttpError;

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the Paylite REST API.
pub struct HttpClient {
    base_url: String,
    client: Client,
    /// Current access token. NEVER exposed publicly.
    access_token: Arc<RwLock<Option<String>>>,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout: Duration, initial_token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            access_token: Arc::new(RwLock::new(initial_token)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the access token used for subsequent requests.
    pub(crate) async fn set_access_token(&self, token: Option<String>) {
        *self.access_token.write().await = token;
    }

    pub(crate) async fn clear_access_token(&self) {
        *self.access_token.write().await = None;
    }

    // ── Verb helpers ─────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        token_override: Option<&str>,
    ) -> Result<T, HttpError> {
        self.request(reqwest::Method::GET, endpoint, None::<&()>, token_override)
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
        token_override: Option<&str>,
    ) -> Result<T, HttpError> {
        self.request(reqwest::Method::POST, endpoint, Some(body), token_override)
            .await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
        token_override: Option<&str>,
    ) -> Result<T, HttpError> {
        self.request(reqwest::Method::PUT, endpoint, Some(body), token_override)
            .await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
        token_override: Option<&str>,
    ) -> Result<T, HttpError> {
        self.request(reqwest::Method::PATCH, endpoint, Some(body), token_override)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        token_override: Option<&str>,
    ) -> Result<T, HttpError> {
        self.request(
            reqwest::Method::DELETE,
            endpoint,
            None::<&()>,
            token_override,
        )
        .await
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        endpoint: &str,
        body: Option<&B>,
        token_override: Option<&str>,
    ) -> Result<T, HttpError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut req = self.client.request(method.clone(), &url);

        // Precedence: explicit override, else the stored token, else no header.
        let token = match token_override {
            Some(t) => Some(t.to_string()),
            None => self.access_token.read().await.clone(),
        };
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        tracing::debug!(%method, endpoint, "api request");

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) if e.is_timeout() => {
                tracing::warn!(%method, endpoint, "api request timed out");
                return Err(HttpError::Timeout);
            }
            Err(e) => {
                tracing::warn!(%method, endpoint, error = %e, "api transport failure");
                return Err(HttpError::Network {
                    detail: e.to_string(),
                });
            }
        };

        let status = resp.status();
        if status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            tracing::debug!(%method, endpoint, status = status.as_u16(), "api response");
            return serde_json::from_str(&text).map_err(|e| HttpError::Decode(e.to_string()));
        }

        let body_text = resp.text().await.unwrap_or_default();
        tracing::debug!(
            %method,
            endpoint,
            status = status.as_u16(),
            body = %body_text,
            "api error response"
        );
        Err(api_error(status.as_u16(), &body_text))
    }
}

impl Clone for HttpClient {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            access_token: self.access_token.clone(),
        }
    }
}

/// Build an `Api` error from a non-2xx response body, taking the message from
/// the body's `message` field when present.
fn api_error(status: u16, body_text: &str) -> HttpError {
    let body: Option<serde_json::Value> = serde_json::from_str(body_text).ok();
    let message = body
        .as_ref()
        .and_then(|b| b.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| "Something went wrong. Please try again".to_string());

    HttpError::Api {
        status,
        message,
        body,
    }
}
