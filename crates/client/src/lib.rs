//! Pulse client - data fetching and state sync for the dashboard
//!
//! This crate is the headless half of the dashboard: it talks to the backend,
//! keeps per-resource fetch state and tells subscribers when it changes. The
//! Dioxus UI in `pulse-dashboard` only mirrors that state into signals.

#[macro_use]
pub mod logging;

pub mod api_client;
pub mod config;
pub mod endpoints;
pub mod fetch_state;
pub mod platform;
pub mod poller;
pub mod resource;
pub mod sales_orders;

#[cfg(test)]
mod test_support;

pub use api_client::{ApiClient, HttpTransport, RawResponse, Transport};
pub use config::ClientConfig;
pub use endpoints::{
    DashboardStatsEndpoint, ListEndpoint, OrderFlowEndpoint, RecentOrdersEndpoint,
    SalesOrderFilterOptionsEndpoint, SalesOrdersEndpoint, SalesStatsEndpoint,
};
pub use fetch_state::{FetchState, Snapshot};
pub use poller::{PollHandle, Poller};
pub use resource::{Endpoint, Resource};
pub use sales_orders::SalesOrders;
