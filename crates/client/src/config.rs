//! Client configuration.
//!
//! Environment variables (read at runtime on native, at compile time on wasm
//! where there is no process environment):
//! - `PULSE_API_URL`: backend base URL (default: `http://localhost:5000`)
//! - `PULSE_REQUEST_TIMEOUT_SECS`: per-request bound (default: 30)
//! - `PULSE_POLL_INTERVAL_SECS`: refresh cadence for aggregate data (default: 30)
//! - `PULSE_RECENT_ORDERS_LIMIT`: rows in the recent-orders table (default: 10)

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);
pub const DEFAULT_RECENT_ORDERS_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub poll_interval: Duration,
    pub recent_orders_limit: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            recent_orders_limit: DEFAULT_RECENT_ORDERS_LIMIT,
        }
    }
}

impl ClientConfig {
    /// Build the configuration from the process (or build) environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "PULSE_API_URL" => option_env!("PULSE_API_URL"),
                "PULSE_REQUEST_TIMEOUT_SECS" => option_env!("PULSE_REQUEST_TIMEOUT_SECS"),
                "PULSE_POLL_INTERVAL_SECS" => option_env!("PULSE_POLL_INTERVAL_SECS"),
                "PULSE_RECENT_ORDERS_LIMIT" => option_env!("PULSE_RECENT_ORDERS_LIMIT"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Build the configuration from an arbitrary key lookup. Unset or invalid
    /// values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base_url = match lookup("PULSE_API_URL").map(|v| v.trim().to_string()) {
            Some(raw) if raw.is_empty() => defaults.api_base_url,
            Some(raw) => match url::Url::parse(&raw) {
                Ok(_) => raw.trim_end_matches('/').to_string(),
                Err(e) => {
                    crate::log_warn!("ignoring invalid PULSE_API_URL '{}': {}", raw, e);
                    defaults.api_base_url
                }
            },
            None => defaults.api_base_url,
        };

        let positive = |key: &str| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|v| *v > 0)
        };

        Self {
            api_base_url,
            request_timeout: positive("PULSE_REQUEST_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            poll_interval: positive("PULSE_POLL_INTERVAL_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.poll_interval),
            recent_orders_limit: positive("PULSE_RECENT_ORDERS_LIMIT")
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(defaults.recent_orders_limit),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}
