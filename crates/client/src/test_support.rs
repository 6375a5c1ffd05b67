//! Scripted [`Transport`] for unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_channel::oneshot;
use pulse_shared::ApiError;

use crate::api_client::{ApiClient, RawResponse, Transport};

enum Step {
    Reply(RawResponse),
    Fail(ApiError),
    Hang(Arc<AtomicBool>),
    Gate(oneshot::Receiver<RawResponse>, Arc<AtomicBool>),
}

#[derive(Default)]
struct Script {
    steps: VecDeque<Step>,
    fallback: Option<RawResponse>,
    requests: Vec<String>,
}

/// Sets its flag when dropped before being disarmed.
struct DropFlag(Option<Arc<AtomicBool>>);

impl DropFlag {
    fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for DropFlag {
    fn drop(&mut self) {
        if let Some(flag) = self.0.take() {
            flag.store(true, Ordering::SeqCst);
        }
    }
}

/// Replays queued responses in order, then the fallback (if any).
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new().with_transport(self.clone())
    }

    fn push(&self, step: Step) {
        self.script.lock().unwrap().steps.push_back(step);
    }

    pub fn push_raw(&self, status: u16, body: &str) {
        self.push(Step::Reply(RawResponse::new(status, body)));
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push(Step::Reply(RawResponse::new(status, body.to_string())));
    }

    pub fn push_error(&self, err: ApiError) {
        self.push(Step::Fail(err));
    }

    /// Queue a request that never completes. The flag flips once the
    /// in-flight future is dropped.
    pub fn push_hang(&self) -> Arc<AtomicBool> {
        let flag = Arc::new(AtomicBool::new(false));
        self.push(Step::Hang(flag.clone()));
        flag
    }

    /// Queue a request completed by the test through the returned sender.
    pub fn push_gate(&self) -> (oneshot::Sender<RawResponse>, Arc<AtomicBool>) {
        let (tx, rx) = oneshot::channel();
        let flag = Arc::new(AtomicBool::new(false));
        self.push(Step::Gate(rx, flag.clone()));
        (tx, flag)
    }

    /// Response used once the queue is empty.
    pub fn set_fallback_json(&self, status: u16, body: serde_json::Value) {
        self.script.lock().unwrap().fallback = Some(RawResponse::new(status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<String> {
        self.script.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.script.lock().unwrap().requests.len()
    }

    pub fn last_request(&self) -> Option<String> {
        self.script.lock().unwrap().requests.last().cloned()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        let (step, fallback) = {
            let mut script = self.script.lock().unwrap();
            script.requests.push(url.to_string());
            (script.steps.pop_front(), script.fallback.clone())
        };
        match step {
            Some(Step::Reply(resp)) => Ok(resp),
            Some(Step::Fail(err)) => Err(err),
            Some(Step::Hang(flag)) => {
                let _guard = DropFlag(Some(flag));
                futures_util::future::pending().await
            }
            Some(Step::Gate(rx, flag)) => {
                let guard = DropFlag(Some(flag));
                let result = rx
                    .await
                    .map_err(|_| ApiError::Network("gate sender dropped".to_string()));
                guard.disarm();
                result
            }
            None => fallback.ok_or_else(|| ApiError::Network("no scripted response".to_string())),
        }
    }
}

/// Minimal sales-orders envelope with `count` orders.
pub(crate) fn sales_orders_body(
    count: usize,
    page: u32,
    next_cursor: Option<&str>,
) -> serde_json::Value {
    let data: Vec<_> = (0..count)
        .map(|i| {
            serde_json::json!({
                "_id": format!("id-{page}-{i}"),
                "katana_order_number": format!("SO-{page}{i:02}"),
                "status": "pending",
            })
        })
        .collect();
    serde_json::json!({
        "status": "success",
        "data": data,
        "pagination": {
            "current_page": page,
            "total_pages": 3,
            "total_count": 55,
            "has_next": page < 3,
            "has_prev": page > 1,
            "next_cursor": next_cursor,
        },
        "filters_applied": {},
    })
}
