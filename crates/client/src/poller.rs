//! Fixed-interval refresh loop.

use std::future::Future;
use std::time::Duration;

use futures_util::future::{AbortHandle, Abortable};

use crate::platform::{self, MaybeSend};

/// Keeps a polling loop alive. Dropping it stops the loop.
#[derive(Debug)]
pub struct PollHandle {
    abort: AbortHandle,
}

impl PollHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

pub struct Poller;

impl Poller {
    /// Run `task` now and then every `interval` until the handle goes away.
    ///
    /// Ticks do not overlap: the next wait starts once the previous run has
    /// finished.
    pub fn start<F, Fut>(interval: Duration, mut task: F) -> PollHandle
    where
        F: FnMut() -> Fut + MaybeSend + 'static,
        Fut: Future<Output = ()> + MaybeSend + 'static,
    {
        let (abort, registration) = AbortHandle::new_pair();
        let run = async move {
            loop {
                task().await;
                platform::sleep(interval).await;
            }
        };
        platform::spawn(async move {
            if Abortable::new(run, registration).await.is_err() {
                crate::log_debug!("poller stopped");
            }
        });
        PollHandle { abort }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting() -> (Arc<AtomicUsize>, impl FnMut() -> futures_util::future::Ready<()> + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let task = {
            let count = count.clone();
            move || {
                count.fetch_add(1, Ordering::SeqCst);
                futures_util::future::ready(())
            }
        };
        (count, task)
    }

    #[tokio::test(start_paused = true)]
    async fn fires_immediately_then_on_each_interval() {
        let (count, task) = counting();
        let handle = Poller::start(Duration::from_secs(30), task);

        tokio::time::sleep(Duration::from_secs(65)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
        drop(handle);
    }

    #[tokio::test(start_paused = true)]
    async fn no_tick_after_drop() {
        let (count, task) = counting();
        let handle = Poller::start(Duration::from_secs(30), task);
        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        drop(handle);
        tokio::time::sleep(Duration::from_secs(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_loop_and_reports_it() {
        let (count, task) = counting();
        let handle = Poller::start(Duration::from_secs(10), task);
        tokio::task::yield_now().await;
        handle.cancel();
        assert!(handle.is_cancelled());

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
