//! Backend endpoints consumed by the dashboard.

use std::marker::PhantomData;

use pulse_shared::{
    decode_envelope, validate_envelope, ApiError, DashboardStats, DataEnvelope, FilterOptions,
    FilterOptionsEnvelope, ListEnvelope, ListPage, OrderFlowPoint, PurchaseOrder, RecentOrder,
    SalesOrderFilters, SalesOrdersEnvelope, SalesOrdersPage, SalesStats, StockTransfer,
    TargetOrder,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::DEFAULT_RECENT_ORDERS_LIMIT;
use crate::resource::Endpoint;

fn fallback(name: &str) -> String {
    format!("Failed to fetch {name}")
}

/// `/api/sales-orders`, filtered and paged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesOrdersEndpoint;

impl Endpoint for SalesOrdersEndpoint {
    type Query = SalesOrderFilters;
    type Output = SalesOrdersPage;

    fn name(&self) -> &'static str {
        "sales orders"
    }

    fn path(&self) -> String {
        "/api/sales-orders".to_string()
    }

    fn query_pairs(&self, query: &SalesOrderFilters) -> Vec<(String, String)> {
        query.to_query_pairs()
    }

    fn decode(&self, body: serde_json::Value) -> Result<SalesOrdersPage, ApiError> {
        decode_envelope::<SalesOrdersEnvelope>(body, &fallback(self.name())).map(Into::into)
    }
}

/// `/api/sales-orders/filters`: dropdown choices for the filter panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesOrderFilterOptionsEndpoint;

impl Endpoint for SalesOrderFilterOptionsEndpoint {
    type Query = ();
    type Output = FilterOptions;

    fn name(&self) -> &'static str {
        "filter options"
    }

    fn path(&self) -> String {
        "/api/sales-orders/filters".to_string()
    }

    fn decode(&self, body: serde_json::Value) -> Result<FilterOptions, ApiError> {
        decode_envelope::<FilterOptionsEnvelope>(body, &fallback(self.name())).map(|e| e.filters)
    }
}

/// Plain `{status, data, pagination}` list endpoint.
pub struct ListEndpoint<T> {
    name: &'static str,
    path: &'static str,
    _item: PhantomData<fn() -> T>,
}

impl<T> ListEndpoint<T> {
    pub const fn new(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path,
            _item: PhantomData,
        }
    }
}

impl ListEndpoint<PurchaseOrder> {
    pub const fn purchase_orders() -> Self {
        Self::new("purchase orders", "/api/purchase-orders")
    }
}

impl ListEndpoint<StockTransfer> {
    pub const fn stock_transfers() -> Self {
        Self::new("stock transfers", "/api/stock-transfers")
    }
}

impl ListEndpoint<TargetOrder> {
    pub const fn target_orders() -> Self {
        Self::new("target orders", "/api/target-orders")
    }
}

impl<T> Endpoint for ListEndpoint<T>
where
    T: DeserializeOwned + Clone + std::fmt::Debug + crate::platform::MaybeSend + crate::platform::MaybeSync + 'static,
{
    type Query = ();
    type Output = ListPage<T>;

    fn name(&self) -> &'static str {
        self.name
    }

    fn path(&self) -> String {
        self.path.to_string()
    }

    fn decode(&self, body: serde_json::Value) -> Result<ListPage<T>, ApiError> {
        decode_envelope::<ListEnvelope<T>>(body, &fallback(self.name)).map(Into::into)
    }
}

/// `/api/dashboard-stats`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardStatsEndpoint;

impl Endpoint for DashboardStatsEndpoint {
    type Query = ();
    type Output = DashboardStats;

    fn name(&self) -> &'static str {
        "dashboard stats"
    }

    fn path(&self) -> String {
        "/api/dashboard-stats".to_string()
    }

    fn decode(&self, body: serde_json::Value) -> Result<DashboardStats, ApiError> {
        decode_envelope(body, &fallback(self.name()))
    }
}

/// `/api/sales-stats`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesStatsEndpoint;

impl Endpoint for SalesStatsEndpoint {
    type Query = ();
    type Output = SalesStats;

    fn name(&self) -> &'static str {
        "sales stats"
    }

    fn path(&self) -> String {
        "/api/sales-stats".to_string()
    }

    fn decode(&self, body: serde_json::Value) -> Result<SalesStats, ApiError> {
        decode_envelope::<DataEnvelope<SalesStats>>(body, &fallback(self.name())).map(|e| e.data)
    }
}

/// `/api/recent-orders?limit=N`.
#[derive(Debug, Clone, Copy)]
pub struct RecentOrdersEndpoint {
    pub limit: u32,
}

impl Default for RecentOrdersEndpoint {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RECENT_ORDERS_LIMIT,
        }
    }
}

impl Endpoint for RecentOrdersEndpoint {
    type Query = ();
    type Output = Vec<RecentOrder>;

    fn name(&self) -> &'static str {
        "recent orders"
    }

    fn path(&self) -> String {
        "/api/recent-orders".to_string()
    }

    fn query_pairs(&self, _query: &()) -> Vec<(String, String)> {
        vec![("limit".to_string(), self.limit.to_string())]
    }

    fn decode(&self, body: serde_json::Value) -> Result<Vec<RecentOrder>, ApiError> {
        decode_envelope::<ListEnvelope<RecentOrder>>(body, &fallback(self.name())).map(|e| e.data)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OrderFlowBody {
    Series(Vec<OrderFlowPoint>),
    Wrapped {
        #[serde(default)]
        data: Vec<OrderFlowPoint>,
    },
}

/// `/api/orders/hourly-stats`: the order-flow chart series.
///
/// The backend answers with a bare array. An object body is treated as an
/// envelope and must report success.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderFlowEndpoint;

impl Endpoint for OrderFlowEndpoint {
    type Query = ();
    type Output = Vec<OrderFlowPoint>;

    fn name(&self) -> &'static str {
        "order flow"
    }

    fn path(&self) -> String {
        "/api/orders/hourly-stats".to_string()
    }

    fn decode(&self, body: serde_json::Value) -> Result<Vec<OrderFlowPoint>, ApiError> {
        if body.is_object() {
            validate_envelope(&body, &fallback(self.name()))?;
        }
        match serde_json::from_value(body).map_err(|e| ApiError::Deserialize(e.to_string()))? {
            OrderFlowBody::Series(points) => Ok(points),
            OrderFlowBody::Wrapped { data } => Ok(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sales_orders_decode_keeps_pagination_and_filters() {
        let body = json!({
            "status": "success",
            "data": [{"_id": "a1", "katana_order_number": "SO-1", "status": "open"}],
            "pagination": {"current_page": 2, "total_pages": 4, "total_count": 70,
                           "has_next": true, "has_prev": true, "next_cursor": "abc"},
            "filters_applied": {"status": "open"},
        });
        let page = SalesOrdersEndpoint.decode(body).unwrap();
        assert_eq!(page.orders[0].katana_order_number, "SO-1");
        let pagination = page.pagination.unwrap();
        assert_eq!(pagination.cursor(), Some("abc"));
        assert_eq!(page.filters_applied.unwrap().status.as_deref(), Some("open"));
    }

    #[test]
    fn filter_options_default_date_choices() {
        let body = json!({"status": "success", "filters": {"statuses": ["open"], "dcl_statuses": []}});
        let options = SalesOrderFilterOptionsEndpoint.decode(body).unwrap();
        assert_eq!(options.statuses, vec!["open".to_string()]);
        assert_eq!(options.date_filters.len(), 4);
        assert_eq!(options.date_filters[2].value, "last_7_days");
    }

    #[test]
    fn list_endpoint_uses_its_own_fallback() {
        let err = ListEndpoint::<TargetOrder>::target_orders()
            .decode(json!({"data": []}))
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch target orders");
    }

    #[test]
    fn dashboard_stats_read_overall_block() {
        let body = json!({"status": "success", "overall": {"total_orders": 12, "success_rate": 91.5}});
        let stats = DashboardStatsEndpoint.decode(body).unwrap();
        assert_eq!(stats.overall.total_orders, 12);
        assert_eq!(stats.overall.success_rate, 91.5);
    }

    #[test]
    fn sales_stats_unwrap_data() {
        let body = json!({"status": "success", "data": {"ordersToday": 7, "pendingOrders": 2}});
        let stats = SalesStatsEndpoint.decode(body).unwrap();
        assert_eq!(stats.orders_today, 7);
        assert_eq!(stats.pending_orders, 2);
    }

    #[test]
    fn recent_orders_send_limit() {
        let endpoint = RecentOrdersEndpoint { limit: 5 };
        assert_eq!(
            endpoint.query_pairs(&()),
            vec![("limit".to_string(), "5".to_string())]
        );
    }

    #[test]
    fn order_flow_accepts_bare_array_without_status() {
        let body = json!([{"hour": "09:00", "orders": 4, "completed": 3}, {"time": "10:00"}]);
        let points = OrderFlowEndpoint.decode(body).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].completed, 3);
        assert_eq!(points[0].failed, 0);
        assert_eq!(points[1].hour, "10:00");
    }

    #[test]
    fn order_flow_object_must_report_success() {
        let err = OrderFlowEndpoint
            .decode(json!({"status": "error", "message": "stats offline"}))
            .unwrap_err();
        assert_eq!(err, ApiError::Application("stats offline".to_string()));

        let points = OrderFlowEndpoint
            .decode(json!({"status": "success", "data": [{"hour": "11:00", "orders": 1}]}))
            .unwrap();
        assert_eq!(points[0].orders, 1);
    }
}
