use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use futures_util::{Stream, StreamExt};
use pulse_client::{
    ApiClient, ClientConfig, Endpoint, FetchState, Resource, SalesOrders, Snapshot,
};
use pulse_shared::{SalesOrderFilters, SalesOrdersPage};

/// The app-wide [`ApiClient`], provided by `App`.
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Mirror a snapshot stream into a signal for the lifetime of the component.
///
/// The forwarding task is owned by the component scope, so it stops on
/// unmount together with everything else the component spawned.
fn use_snapshot<T, S>(subscribe: impl FnOnce() -> S) -> Signal<Snapshot<T>>
where
    T: Clone + 'static,
    S: Stream<Item = Snapshot<T>> + Unpin + 'static,
{
    let mut snapshot = use_signal(Snapshot::default);
    use_hook(move || {
        let mut updates = subscribe();
        spawn(async move {
            while let Some(next) = updates.next().await {
                snapshot.set(next);
            }
        });
    });
    snapshot
}

/// Handle returned by [`use_fetch`] and [`use_polled_fetch`].
pub struct UseFetch<E: Endpoint> {
    resource: Resource<E>,
    snapshot: Signal<Snapshot<E::Output>>,
}

impl<E: Endpoint> Clone for UseFetch<E> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
            snapshot: self.snapshot,
        }
    }
}

impl<E: Endpoint> PartialEq for UseFetch<E> {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot == other.snapshot
    }
}

impl<E: Endpoint> UseFetch<E> {
    pub fn state(&self) -> FetchState<E::Output> {
        self.snapshot.read().state.clone()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.snapshot.read().last_updated
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.read().state.is_loading()
    }

    /// Fire a refetch with the held query. Returns immediately.
    pub fn refetch(&self) {
        let resource = self.resource.clone();
        spawn(async move {
            resource.refetch().await;
        });
    }
}

/// Fetch `endpoint` once on mount. In-flight work is aborted on unmount.
pub fn use_fetch<E: Endpoint>(endpoint: impl FnOnce() -> E) -> UseFetch<E> {
    let client = use_api_client();
    let resource = use_hook(move || Resource::new(client, endpoint()));
    let snapshot = use_snapshot({
        let resource = resource.clone();
        move || resource.subscribe()
    });
    use_hook({
        let resource = resource.clone();
        move || {
            spawn(async move {
                resource.refetch().await;
            });
        }
    });
    use_drop({
        let resource = resource.clone();
        move || resource.dispose()
    });
    UseFetch { resource, snapshot }
}

/// Like [`use_fetch`], then refetch every `interval` while mounted.
pub fn use_polled_fetch<E: Endpoint>(
    endpoint: impl FnOnce() -> E,
    interval: Duration,
) -> UseFetch<E> {
    let client = use_api_client();
    let resource = use_hook(move || Resource::new(client, endpoint()));
    let snapshot = use_snapshot({
        let resource = resource.clone();
        move || resource.subscribe()
    });
    // Dropped with the scope, which stops the loop.
    let poll = use_hook({
        let resource = resource.clone();
        move || Rc::new(resource.poll(interval))
    });
    use_drop({
        let resource = resource.clone();
        move || {
            poll.cancel();
            resource.dispose();
        }
    });
    UseFetch { resource, snapshot }
}

/// Sales-orders controller bound to the component.
#[derive(Clone)]
pub struct UseSalesOrders {
    controller: SalesOrders,
    snapshot: Signal<Snapshot<SalesOrdersPage>>,
}

impl PartialEq for UseSalesOrders {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot == other.snapshot
    }
}

impl UseSalesOrders {
    pub fn state(&self) -> FetchState<SalesOrdersPage> {
        self.snapshot.read().state.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.read().state.is_loading()
    }

    pub fn filters(&self) -> SalesOrderFilters {
        self.controller.filters()
    }

    pub fn page_size(&self) -> u32 {
        self.controller.page_size()
    }

    pub fn refetch(&self) {
        let controller = self.controller.clone();
        spawn(async move {
            controller.refetch(None).await;
        });
    }

    pub fn apply_filters(&self, patch: SalesOrderFilters) {
        let controller = self.controller.clone();
        spawn(async move {
            controller.apply_filters(patch).await;
        });
    }

    pub fn clear_filters(&self) {
        let controller = self.controller.clone();
        spawn(async move {
            controller.clear_filters().await;
        });
    }

    pub fn go_to_page(&self, page: u32) {
        let controller = self.controller.clone();
        spawn(async move {
            controller.go_to_page(page).await;
        });
    }

    pub fn set_page_size(&self, limit: u32) {
        let controller = self.controller.clone();
        spawn(async move {
            controller.set_page_size(limit).await;
        });
    }
}

pub fn use_sales_orders(initial: impl FnOnce() -> SalesOrderFilters) -> UseSalesOrders {
    let client = use_api_client();
    let controller = use_hook(move || SalesOrders::new(client, initial()));
    let snapshot = use_snapshot({
        let controller = controller.clone();
        move || controller.subscribe()
    });
    use_hook({
        let controller = controller.clone();
        move || {
            spawn(async move {
                controller.load().await;
            });
        }
    });
    use_drop({
        let controller = controller.clone();
        move || controller.dispose()
    });
    UseSalesOrders {
        controller,
        snapshot,
    }
}
