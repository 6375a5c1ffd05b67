//! Client-side error taxonomy.

use std::time::Duration;

use serde::Deserialize;

/// Errors a fetch can end in.
///
/// Every resource catches these at its boundary and keeps only the display
/// message, so the wording here is what ends up in the error banners.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS).
    #[error("Network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status}{}", http_detail(.body))]
    Http { status: u16, body: String },
    /// No response arrived within the request bound.
    #[error("Request timed out after {}s", whole_secs(.0))]
    Timeout(Duration),
    /// 2xx response whose envelope does not report `"success"`.
    #[error("{0}")]
    Application(String),
    /// Body was not JSON, or not the shape we expected.
    #[error("Failed to parse response: {0}")]
    Deserialize(String),
    /// A newer request for the same resource replaced this one.
    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// Pull a human-readable message out of an `{"status": "error", "message": ..}`
/// body. Prefers `message`, falls back to `details`.
pub fn try_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok()?;
    [parsed.message, parsed.details]
        .into_iter()
        .flatten()
        .find(|m| !m.trim().is_empty())
}

fn whole_secs(bound: &Duration) -> u64 {
    bound.as_secs()
}

fn http_detail(body: &str) -> String {
    match try_error_message(body) {
        Some(message) => format!(" ({message})"),
        None => String::new(),
    }
}
