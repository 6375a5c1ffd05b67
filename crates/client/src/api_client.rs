//! HTTP fetch client for the dashboard backend.
//!
//! [`ApiClient`] owns the base URL and the request bound; the actual wire
//! work goes through a [`Transport`] so tests can script responses without a
//! server. Every request is raced against the timeout and the transport
//! future is aborted if the timer wins.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::{select, AbortHandle, Abortable, Aborted, Either};
use futures_util::pin_mut;
use pulse_shared::ApiError;
use serde::de::DeserializeOwned;

use crate::config::{ClientConfig, DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT};
use crate::platform::{self, MaybeSend, MaybeSync};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can perform a GET and hand back the raw response.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Transport: MaybeSend + MaybeSync {
    async fn get(&self, url: &str) -> Result<RawResponse, ApiError>;
}

/// [`Transport`] backed by `reqwest` (browser `fetch` on wasm).
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        let resp = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        Ok(RawResponse { status, body })
    }
}

/// Build `key=value&...` with both sides percent-encoded.
pub fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// HTTP client for the dashboard API.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    timeout: Duration,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Client pointed at the local development backend.
    pub fn new() -> Self {
        Self {
            transport: Arc::new(HttpTransport::new()),
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new()
            .with_base_url(config.api_base_url.clone())
            .with_timeout(config.request_timeout)
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Swap the wire implementation.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Absolute URL for `path` plus an optional query string.
    pub fn url(&self, path: &str, query: &[(String, String)]) -> String {
        let mut url = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if self.base_url.is_empty() {
            format!("/{}", path.trim_start_matches('/'))
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        };
        if !query.is_empty() {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&encode_query(query));
        }
        url
    }

    /// GET `path` and parse the body as JSON.
    ///
    /// Fails with [`ApiError::Timeout`] when no response arrives within the
    /// configured bound, [`ApiError::Http`] on a non-2xx status and
    /// [`ApiError::Deserialize`] when the body is not JSON.
    pub async fn get_json(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.url(path, query);
        crate::log_debug!("GET {}", url);

        let response = self.send_with_deadline(&url).await?;

        if !response.is_success() {
            crate::log_error!("GET {} failed with HTTP {}", url, response.status);
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    /// GET `path` and decode the JSON body straight into `T`.
    pub async fn get_as<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let body = self.get_json(path, query).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    async fn send_with_deadline(&self, url: &str) -> Result<RawResponse, ApiError> {
        let (abort, registration) = AbortHandle::new_pair();
        let request = Abortable::new(self.transport.get(url), registration);
        let deadline = platform::sleep(self.timeout);
        pin_mut!(request, deadline);

        match select(request, deadline).await {
            Either::Left((Ok(result), _)) => result,
            Either::Left((Err(Aborted), _)) => Err(ApiError::Cancelled),
            Either::Right(((), request)) => {
                abort.abort();
                // An aborted future resolves on its next poll, dropping the
                // transport future with it.
                let _ = request.await;
                crate::log_warn!("GET {} timed out after {:?}", url, self.timeout);
                Err(ApiError::Timeout(self.timeout))
            }
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
