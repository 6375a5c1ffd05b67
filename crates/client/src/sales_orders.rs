//! Sales-orders list with filters and paging.
//!
//! Wraps the generic [`Resource`] and owns the rules for how filter and page
//! changes turn into the next query:
//!
//! - any change to a narrowing filter or to the page size sends the user back
//!   to page 1 and drops the continuation cursor;
//! - moving forward reuses the `next_cursor` of the page on screen when the
//!   server handed one out, moving backward never does;
//! - a bare `refetch` repeats the last query exactly.

use futures_channel::mpsc::UnboundedReceiver;
use pulse_shared::{Pagination, SalesOrderFilters, SalesOrdersPage, DEFAULT_PAGE_SIZE};

use crate::api_client::ApiClient;
use crate::endpoints::SalesOrdersEndpoint;
use crate::fetch_state::{FetchState, Snapshot};
use crate::resource::Resource;

#[derive(Clone)]
pub struct SalesOrders {
    resource: Resource<SalesOrdersEndpoint>,
}

impl SalesOrders {
    /// Controller starting from `initial`. Nothing is fetched until
    /// [`SalesOrders::load`] or one of the navigation calls runs.
    pub fn new(client: ApiClient, initial: SalesOrderFilters) -> Self {
        Self {
            resource: Resource::with_query(client, SalesOrdersEndpoint, initial),
        }
    }

    /// Page 1 at the default page size, no filters.
    pub fn first_page(client: ApiClient) -> Self {
        Self::new(client, SalesOrderFilters::first_page(DEFAULT_PAGE_SIZE))
    }

    /// Filters of the most recently issued request.
    pub fn filters(&self) -> SalesOrderFilters {
        self.resource.query()
    }

    pub fn state(&self) -> FetchState<SalesOrdersPage> {
        self.resource.state()
    }

    pub fn snapshot(&self) -> Snapshot<SalesOrdersPage> {
        self.resource.snapshot()
    }

    pub fn subscribe(&self) -> UnboundedReceiver<Snapshot<SalesOrdersPage>> {
        self.resource.subscribe()
    }

    /// Paging block of the page currently held, if any.
    pub fn pagination(&self) -> Option<Pagination> {
        self.state().into_data().and_then(|page| page.pagination)
    }

    pub fn page_size(&self) -> u32 {
        self.filters().limit.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn dispose(&self) {
        self.resource.dispose();
    }

    /// Initial fetch with the starting filters.
    pub async fn load(&self) -> FetchState<SalesOrdersPage> {
        self.resource.refetch().await
    }

    /// Repeat the last query, or merge `patch` over it and fetch.
    ///
    /// A cursor only survives when the patch carries one explicitly.
    pub async fn refetch(&self, patch: Option<SalesOrderFilters>) -> FetchState<SalesOrdersPage> {
        let Some(patch) = patch else {
            return self.resource.refetch().await;
        };
        let held = self.filters();
        let mut next = held.merged_with(&patch);
        next.cursor = patch.cursor.clone();
        // Offsets are `(page - 1) * limit`, so a new limit restarts paging too.
        if held.filters_differ(&next) || held.limit != next.limit {
            next.page = Some(1);
            next.cursor = None;
        }
        self.resource.refetch_with(next).await
    }

    /// Apply a filter patch. Always lands on page 1.
    pub async fn apply_filters(&self, patch: SalesOrderFilters) -> FetchState<SalesOrdersPage> {
        let mut next = self.filters().merged_with(&patch);
        next.page = Some(1);
        next.cursor = None;
        self.resource.refetch_with(next).await
    }

    /// Drop every narrowing filter, back to page 1 at the same page size.
    pub async fn clear_filters(&self) -> FetchState<SalesOrdersPage> {
        let mut next = self.filters().without_filters();
        next.page = Some(1);
        next.cursor = None;
        self.resource.refetch_with(next).await
    }

    pub async fn go_to_page(&self, page: u32) -> FetchState<SalesOrdersPage> {
        let page = page.max(1);
        let held = self.filters();
        let mut next = held.clone();
        next.page = Some(page);
        next.cursor = None;
        if page > held.current_page() {
            next.cursor = self
                .pagination()
                .and_then(|p| p.cursor().map(str::to_string));
        }
        self.resource.refetch_with(next).await
    }

    /// Advance one page when the server says there is one.
    pub async fn next_page(&self) -> FetchState<SalesOrdersPage> {
        if !self.pagination().is_some_and(|p| p.has_next) {
            return self.state();
        }
        self.go_to_page(self.filters().current_page() + 1).await
    }

    pub async fn prev_page(&self) -> FetchState<SalesOrdersPage> {
        let current = self.filters().current_page();
        if current <= 1 || !self.pagination().is_some_and(|p| p.has_prev) {
            return self.state();
        }
        self.go_to_page(current - 1).await
    }

    pub async fn set_page_size(&self, limit: u32) -> FetchState<SalesOrdersPage> {
        let mut next = self.filters();
        next.limit = Some(limit.max(1));
        next.page = Some(1);
        next.cursor = None;
        self.resource.refetch_with(next).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sales_orders_body, ScriptedTransport};

    fn controller(transport: &ScriptedTransport) -> SalesOrders {
        SalesOrders::new(transport.client(), SalesOrderFilters::first_page(20))
    }

    fn last(transport: &ScriptedTransport) -> String {
        transport.last_request().unwrap()
    }

    #[tokio::test]
    async fn filter_change_resets_to_first_page() {
        let transport = ScriptedTransport::new();
        transport.push_json(200, sales_orders_body(20, 5, None));
        transport.push_json(200, sales_orders_body(3, 1, None));
        let orders = controller(&transport);

        orders.go_to_page(5).await;
        assert!(last(&transport).contains("page=5"));

        let patch = SalesOrderFilters {
            status: Some("pending".into()),
            ..Default::default()
        };
        orders.refetch(Some(patch)).await;

        assert_eq!(
            last(&transport),
            "http://localhost:5000/api/sales-orders?page=1&limit=20&status=pending"
        );
        assert_eq!(orders.filters().current_page(), 1);
    }

    #[tokio::test]
    async fn same_filters_keep_requested_page() {
        let transport = ScriptedTransport::new();
        transport.set_fallback_json(200, sales_orders_body(20, 2, None));
        let orders = SalesOrders::new(
            transport.client(),
            SalesOrderFilters::first_page(20).with_status("pending"),
        );

        let patch = SalesOrderFilters {
            page: Some(3),
            status: Some("pending".into()),
            ..Default::default()
        };
        orders.refetch(Some(patch)).await;
        assert!(last(&transport).contains("page=3"));
    }

    #[tokio::test]
    async fn forward_uses_cursor_backward_does_not() {
        let transport = ScriptedTransport::new();
        transport.push_json(200, sales_orders_body(20, 1, Some("abc")));
        transport.push_json(200, sales_orders_body(20, 2, Some("def")));
        transport.push_json(200, sales_orders_body(20, 1, Some("abc")));
        let orders = controller(&transport);

        orders.load().await;
        orders.next_page().await;
        let forward = last(&transport);
        assert!(forward.contains("page=2"));
        assert!(forward.ends_with("cursor=abc"));

        orders.prev_page().await;
        let backward = last(&transport);
        assert!(backward.contains("page=1"));
        assert!(!backward.contains("cursor"));
    }

    #[tokio::test]
    async fn forward_without_cursor_falls_back_to_page_numbers() {
        let transport = ScriptedTransport::new();
        transport.set_fallback_json(200, sales_orders_body(20, 1, None));
        let orders = controller(&transport);

        orders.load().await;
        orders.go_to_page(3).await;
        assert_eq!(
            last(&transport),
            "http://localhost:5000/api/sales-orders?page=3&limit=20"
        );
    }

    #[tokio::test]
    async fn bare_refetch_repeats_last_query() {
        let transport = ScriptedTransport::new();
        transport.set_fallback_json(200, sales_orders_body(20, 1, Some("abc")));
        let orders = controller(&transport);

        orders.load().await;
        orders.go_to_page(2).await;
        let applied = last(&transport);
        orders.refetch(None).await;
        orders.refetch(None).await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 4);
        assert_eq!(requests[2], applied);
        assert_eq!(requests[3], applied);
    }

    #[tokio::test]
    async fn page_size_change_resets_page_and_cursor() {
        let transport = ScriptedTransport::new();
        transport.set_fallback_json(200, sales_orders_body(20, 1, Some("abc")));
        let orders = controller(&transport);

        orders.load().await;
        orders.go_to_page(2).await;
        orders.set_page_size(50).await;

        assert_eq!(
            last(&transport),
            "http://localhost:5000/api/sales-orders?page=1&limit=50"
        );
        assert_eq!(orders.page_size(), 50);

        orders.go_to_page(5).await;
        let patch = SalesOrderFilters {
            limit: Some(100),
            ..Default::default()
        };
        orders.refetch(Some(patch)).await;

        assert_eq!(
            last(&transport),
            "http://localhost:5000/api/sales-orders?page=1&limit=100"
        );
        assert_eq!(orders.filters().current_page(), 1);
        assert_eq!(orders.page_size(), 100);
    }

    #[tokio::test]
    async fn row_with_null_status_still_renders_page() {
        let transport = ScriptedTransport::new();
        transport.push_json(
            200,
            serde_json::json!({
                "status": "success",
                "data": [
                    {"_id": "a", "katana_order_number": "SO-1", "status": "pending"},
                    {"_id": "b", "katana_order_number": null, "status": null, "dcl_status": null},
                ],
                "pagination": {"current_page": 1, "total_pages": 1, "total_count": 2},
            }),
        );
        let orders = controller(&transport);

        let state = orders.load().await;
        assert!(state.is_success(), "{state:?}");
        let page = state.data().unwrap();
        assert_eq!(page.orders.len(), 2);
        assert_eq!(page.orders[1].status, "");
    }

    #[tokio::test]
    async fn clear_filters_keeps_limit_only() {
        let transport = ScriptedTransport::new();
        transport.set_fallback_json(200, sales_orders_body(5, 1, None));
        let initial = SalesOrderFilters::first_page(10)
            .with_status("pending")
            .with_dcl_status("shipped")
            .with_page(4);
        let orders = SalesOrders::new(transport.client(), initial);

        orders.clear_filters().await;
        assert_eq!(
            last(&transport),
            "http://localhost:5000/api/sales-orders?page=1&limit=10"
        );
        assert!(orders.filters().is_unfiltered());
    }

    #[tokio::test]
    async fn next_page_is_a_no_op_on_last_page() {
        let transport = ScriptedTransport::new();
        transport.push_json(200, sales_orders_body(15, 3, None));
        let orders = SalesOrders::new(transport.client(), SalesOrderFilters::first_page(20).with_page(3));

        orders.load().await;
        let state = orders.next_page().await;
        assert!(state.is_success());
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn first_page_of_five_orders_with_more_available() {
        let transport = ScriptedTransport::new();
        transport.push_json(200, sales_orders_body(5, 1, None));
        let orders = controller(&transport);

        let state = orders.load().await;
        let page = state.data().unwrap();
        assert_eq!(page.orders.len(), 5);
        assert!(orders.pagination().unwrap().has_next);
        assert_eq!(
            last(&transport),
            "http://localhost:5000/api/sales-orders?page=1&limit=20"
        );
    }
}
