//! Page components, one per route.

pub mod analytics;
pub mod dashboard;
pub mod layouts;
pub mod not_found;
pub mod orders;
pub mod placeholders;
pub mod purchase_orders;
pub mod sales_orders;
pub mod stock_transfers;
pub mod target_orders;

pub use analytics::Analytics;
pub use dashboard::Dashboard;
pub use layouts::DashboardLayout;
pub use not_found::NotFound;
pub use orders::Orders;
pub use placeholders::{Alerts, Customers, Settings, Shipping};
pub use purchase_orders::PurchaseOrdersView;
pub use sales_orders::SalesOrdersView;
pub use stock_transfers::StockTransfersView;
pub use target_orders::TargetOrdersView;
