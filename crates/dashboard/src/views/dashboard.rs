//! Overview page: headline metrics, order flow and recent activity.

use dioxus::prelude::*;
use pulse_client::{DashboardStatsEndpoint, FetchState, SalesStatsEndpoint};

use crate::components::dashboard::{
    Accent, ErrorBanner, MetricCard, OrderFlowChart, PageHeader, RecentOrdersTable,
};
use crate::hooks::{use_client_config, use_polled_fetch};

#[component]
pub fn Dashboard() -> Element {
    let config = use_client_config();
    let sales = use_polled_fetch(|| SalesStatsEndpoint, config.poll_interval);
    let overall = use_polled_fetch(|| DashboardStatsEndpoint, config.poll_interval);

    let loading = sales.is_loading();
    let stats = sales.state().into_data().unwrap_or_default();
    let error = sales.state().error().map(str::to_string);
    let last_updated = sales
        .last_updated()
        .map(|at| at.format("%H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string());

    let avg = stats
        .avg_processing_time
        .clone()
        .unwrap_or_else(|| "-".to_string());

    let overall_line = match overall.state() {
        FetchState::Success(s) => Some(format!(
            "{} orders overall, {:.1}% successful",
            s.overall.total_orders, s.overall.success_rate
        )),
        _ => None,
    };

    let refresh = {
        let sales = sales.clone();
        let overall = overall.clone();
        move |_| {
            sales.refetch();
            overall.refetch();
        }
    };

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "Dashboard",
                subtitle: "Welcome back! Here's what's happening today.",
                loading,
                on_refresh: refresh,
                extra: rsx! {
                    span { class: "text-sm text-slate-400", "Last updated: {last_updated}" }
                },
            }

            if let Some(message) = error {
                ErrorBanner { message, context: "dashboard data" }
            }

            div { class: "grid grid-cols-1 gap-6 md:grid-cols-3 xl:grid-cols-6",
                MetricCard { title: "Orders Today", value: stats.orders_today.to_string(), loading }
                MetricCard { title: "Pending Orders", value: stats.pending_orders.to_string(), accent: Accent::Warning, loading }
                MetricCard { title: "Completed Orders", value: stats.completed_orders.to_string(), accent: Accent::Success, loading }
                MetricCard { title: "Failed Orders", value: stats.failed_orders.to_string(), accent: Accent::Danger, loading }
                MetricCard { title: "Success Rate", value: format!("{:.1}%", stats.success_rate), accent: Accent::Success, loading }
                MetricCard { title: "Avg Processing", value: avg, loading }
            }

            if let Some(line) = overall_line {
                p { class: "text-sm text-slate-400", "{line}" }
            }

            OrderFlowChart {}
            RecentOrdersTable {}
        }
    }
}
