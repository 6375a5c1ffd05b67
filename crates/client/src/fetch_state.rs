//! Per-resource fetch state.

use chrono::{DateTime, Utc};

/// Where a resource is in its request lifecycle.
///
/// Error and success are mutually exclusive: a failed refetch drops the
/// previously loaded payload rather than showing it next to the error.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FetchState::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            FetchState::Idle => FetchState::Idle,
            FetchState::Loading => FetchState::Loading,
            FetchState::Success(data) => FetchState::Success(f(data)),
            FetchState::Error(message) => FetchState::Error(message),
        }
    }
}

/// State plus bookkeeping, as broadcast to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    pub state: FetchState<T>,
    /// When the last successful response was applied.
    pub last_updated: Option<DateTime<Utc>>,
    /// Request generation that produced `state` (0 before the first request).
    pub generation: u64,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            state: FetchState::Idle,
            last_updated: None,
            generation: 0,
        }
    }
}
