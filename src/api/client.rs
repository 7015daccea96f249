//! HTTP client for the portal backend
//!
//! Every request goes through [`PortalClient::request`], which attaches the
//! bearer token when one is set. There is no retry: a failed request is
//! reported once and the caller decides what to show.

use reqwest::{Client, IntoUrl, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::{Arc, RwLock};
use url::Url;

use crate::config::ApiConfig;
use crate::error::{Error, Result};

// ============================================================================
// Error Body
// ============================================================================

/// Error body the backend sends with non-success statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Extract the user-facing `detail` from an error body.
///
/// `detail` is usually a string; request validation failures carry a list of
/// `{ "msg": ... }` objects instead.
fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Array(entries) => {
            let messages: Vec<String> = entries
                .iter()
                .filter_map(|e| e.get("msg").and_then(Value::as_str).map(str::to_string))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

// ============================================================================
// Portal Client
// ============================================================================

/// Client for the portal REST API.
///
/// Cloning is cheap; clones share the connection pool and the token.
#[derive(Debug, Clone)]
pub struct PortalClient {
    base_url: Url,
    http_client: Client,
    token: Arc<RwLock<Option<String>>>,
}

impl PortalClient {
    /// Create a new portal client
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(config.base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "API base URL cannot carry paths: {}",
                config.base_url
            )));
        }

        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::with_source("Failed to build HTTP client", e))?;

        Ok(Self {
            base_url,
            http_client,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Client against `base_url` with default settings
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::new(&ApiConfig::with_base_url(base_url))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Replace the bearer token (`None` clears it)
    pub fn set_token(&self, token: Option<String>) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Build an endpoint URL from path segments, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Start a request, attaching `Authorization: Bearer <token>` when logged in
    pub(crate) fn request<U: IntoUrl>(&self, method: Method, url: U) -> RequestBuilder {
        let builder = self.http_client.request(method, url);
        match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // Internal: GET and decode
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments);
        tracing::debug!(method = "GET", url = %url, "Sending request");
        let response = self.request(Method::GET, url).send().await?;
        decode(response).await
    }

    // Internal: GET with query string and decode
    pub(crate) async fn get_json_with<T, Q>(&self, segments: &[&str], query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(segments);
        tracing::debug!(method = "GET", url = %url, "Sending request");
        let response = self.request(Method::GET, url).query(query).send().await?;
        decode(response).await
    }

    // Internal: request with JSON body and decode
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments);
        tracing::debug!(method = %method, url = %url, "Sending request");
        let response = self.request(method, url).json(body).send().await?;
        decode(response).await
    }

    // Internal: request with JSON body, response body ignored
    pub(crate) async fn send_unit<B>(&self, method: Method, segments: &[&str], body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments);
        tracing::debug!(method = %method, url = %url, "Sending request");
        let response = self.request(method, url).json(body).send().await?;
        check(response).await.map(|_| ())
    }

    // Internal: POST with an empty JSON object body (`{}`)
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.send_json(Method::POST, segments, &serde_json::json!({}))
            .await
    }

    // Internal: DELETE, expecting an empty (204) response
    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<()> {
        let url = self.endpoint(segments);
        tracing::debug!(method = "DELETE", url = %url, "Sending request");
        let response = self.request(Method::DELETE, url).send().await?;
        check(response).await.map(|_| ())
    }
}

/// Turn a non-success response into [`Error::Api`] carrying the backend detail
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = extract_detail(&body);
    tracing::debug!(status = status.as_u16(), detail = ?detail, "Request rejected");
    Err(Error::Api {
        status: status.as_u16(),
        detail,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check(response).await?;
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| Error::Decode(e.to_string()))
}

// ============================================================================
// Tests
// ============================================================================
