//! Remote resource state machine.
//!
//! A [`Resource`] owns one endpoint's fetch state and moves it through
//! `Idle → Loading → Success | Error`. Any trigger (mount, manual refetch,
//! filter change, poll tick) re-enters `Loading`.
//!
//! Requests can overlap: a refetch may be issued while an older one is still
//! pending, and completions are not guaranteed to arrive in issue order. Each
//! request therefore carries a generation number and only the latest
//! generation may write state. Starting a request also aborts the previous
//! one so its transport future is dropped early.
//!
//! State changes are pushed to every [`Resource::subscribe`] receiver, which
//! is how the UI layer learns about them.

use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures_util::future::{AbortHandle, Abortable, Aborted};
use pulse_shared::ApiError;

use crate::api_client::ApiClient;
use crate::fetch_state::{FetchState, Snapshot};
use crate::platform::{MaybeSend, MaybeSync};
use crate::poller::{PollHandle, Poller};

/// Describes one backend endpoint: where it lives, how its query is
/// rendered and how its body becomes the output type.
pub trait Endpoint: MaybeSend + MaybeSync + 'static {
    type Query: Clone + Default + PartialEq + Debug + MaybeSend + MaybeSync + 'static;
    type Output: Clone + Debug + MaybeSend + MaybeSync + 'static;

    /// Short human name, used in logs and fallback error messages.
    fn name(&self) -> &'static str;

    fn path(&self) -> String;

    fn query_pairs(&self, _query: &Self::Query) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Validate and decode a 2xx JSON body.
    fn decode(&self, body: serde_json::Value) -> Result<Self::Output, ApiError>;
}

struct Inner<E: Endpoint> {
    query: E::Query,
    snapshot: Snapshot<E::Output>,
    latest_generation: u64,
    in_flight: Option<AbortHandle>,
    subscribers: Vec<UnboundedSender<Snapshot<E::Output>>>,
}

impl<E: Endpoint> Inner<E> {
    fn publish(&mut self, state: FetchState<E::Output>, generation: u64) {
        if state.is_success() {
            self.snapshot.last_updated = Some(Utc::now());
        }
        self.snapshot.state = state;
        self.snapshot.generation = generation;
        let snapshot = self.snapshot.clone();
        self.subscribers
            .retain(|tx| tx.unbounded_send(snapshot.clone()).is_ok());
    }
}

/// Fetch state for one endpoint, shared by clones.
pub struct Resource<E: Endpoint> {
    client: ApiClient,
    endpoint: Arc<E>,
    inner: Arc<Mutex<Inner<E>>>,
}

impl<E: Endpoint> Clone for Resource<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            endpoint: self.endpoint.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<E: Endpoint> Resource<E> {
    pub fn new(client: ApiClient, endpoint: E) -> Self {
        Self::with_query(client, endpoint, E::Query::default())
    }

    pub fn with_query(client: ApiClient, endpoint: E, query: E::Query) -> Self {
        Self {
            client,
            endpoint: Arc::new(endpoint),
            inner: Arc::new(Mutex::new(Inner {
                query,
                snapshot: Snapshot::default(),
                latest_generation: 0,
                in_flight: None,
                subscribers: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<E>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    /// Query the next bare `refetch()` will repeat.
    pub fn query(&self) -> E::Query {
        self.lock().query.clone()
    }

    pub fn state(&self) -> FetchState<E::Output> {
        self.lock().snapshot.state.clone()
    }

    pub fn snapshot(&self) -> Snapshot<E::Output> {
        self.lock().snapshot.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.lock().in_flight.is_some()
    }

    /// Stream of snapshots, starting with the current one.
    pub fn subscribe(&self) -> UnboundedReceiver<Snapshot<E::Output>> {
        let (tx, rx) = unbounded();
        let mut inner = self.lock();
        // A fresh channel cannot be closed yet.
        let _ = tx.unbounded_send(inner.snapshot.clone());
        inner.subscribers.push(tx);
        rx
    }

    /// Repeat the last request verbatim.
    pub async fn refetch(&self) -> FetchState<E::Output> {
        let query = self.query();
        self.execute(query).await
    }

    /// Replace the held query and fetch with it.
    pub async fn refetch_with(&self, query: E::Query) -> FetchState<E::Output> {
        self.execute(query).await
    }

    /// Refetch now and then every `interval` until the handle is dropped.
    pub fn poll(&self, interval: Duration) -> PollHandle {
        let resource = self.clone();
        Poller::start(interval, move || {
            let resource = resource.clone();
            async move {
                resource.refetch().await;
            }
        })
    }

    /// Abort any in-flight request and close all subscriptions.
    ///
    /// Called when the owning view goes away. The held state is left as is.
    pub fn dispose(&self) {
        let mut inner = self.lock();
        inner.latest_generation += 1;
        if let Some(handle) = inner.in_flight.take() {
            handle.abort();
        }
        inner.subscribers.clear();
    }

    async fn execute(&self, query: E::Query) -> FetchState<E::Output> {
        let (handle, registration) = AbortHandle::new_pair();
        let generation = {
            let mut inner = self.lock();
            if let Some(previous) = inner.in_flight.replace(handle) {
                previous.abort();
            }
            inner.latest_generation += 1;
            let generation = inner.latest_generation;
            inner.query = query.clone();
            inner.publish(FetchState::Loading, generation);
            generation
        };

        let path = self.endpoint.path();
        let pairs = self.endpoint.query_pairs(&query);
        let outcome = Abortable::new(self.client.get_json(&path, &pairs), registration).await;
        let result = match outcome {
            Ok(Ok(body)) => self.endpoint.decode(body),
            Ok(Err(e)) => Err(e),
            Err(Aborted) => Err(ApiError::Cancelled),
        };

        let mut inner = self.lock();
        if generation != inner.latest_generation {
            crate::log_debug!(
                "{}: dropping response for request #{} (latest is #{})",
                self.endpoint.name(),
                generation,
                inner.latest_generation
            );
            return inner.snapshot.state.clone();
        }
        inner.in_flight = None;

        let state = match result {
            Ok(output) => FetchState::Success(output),
            Err(ApiError::Cancelled) => FetchState::Idle,
            Err(e) => {
                crate::log_error!("Error fetching {}: {}", self.endpoint.name(), e);
                FetchState::Error(e.to_string())
            }
        };
        inner.publish(state.clone(), generation);
        state
    }
}
