//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{
    Alerts, Analytics, Customers, Dashboard, DashboardLayout, NotFound, Orders,
    PurchaseOrdersView, SalesOrdersView, Settings, Shipping, StockTransfersView, TargetOrdersView,
};

// Router configuration
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DashboardLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/orders")]
        Orders {},
        #[route("/sales-orders")]
        SalesOrdersView {},
        #[route("/purchase-orders")]
        PurchaseOrdersView {},
        #[route("/stock-transfers")]
        StockTransfersView {},
        #[route("/target-orders")]
        TargetOrdersView {},
        #[route("/analytics")]
        Analytics {},

        // Sections without data yet
        #[route("/customers")]
        Customers {},
        #[route("/shipping")]
        Shipping {},
        #[route("/alerts")]
        Alerts {},
        #[route("/settings")]
        Settings {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
