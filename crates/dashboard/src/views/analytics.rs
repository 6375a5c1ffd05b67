use dioxus::prelude::*;
use pulse_client::{DashboardStatsEndpoint, FetchState};
use pulse_shared::OverallStats;

use crate::components::dashboard::{ErrorBanner, OrderFlowChart, PageHeader};
use crate::components::ui::Card;
use crate::hooks::{use_client_config, use_polled_fetch};

#[component]
pub fn Analytics() -> Element {
    let config = use_client_config();
    let stats = use_polled_fetch(|| DashboardStatsEndpoint, config.poll_interval);

    let distribution = match stats.state() {
        FetchState::Idle | FetchState::Loading => rsx! {
            p { class: "text-sm text-slate-400", "Loading status distribution..." }
        },
        FetchState::Error(message) => rsx! {
            ErrorBanner {
                message,
                on_retry: {
                    let stats = stats.clone();
                    move |_| stats.refetch()
                },
            }
        },
        FetchState::Success(stats) => rsx! { StatusDistribution { overall: stats.overall } },
    };

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "Analytics",
                subtitle: "Detailed analytics and reporting for your orders.",
                loading: stats.is_loading(),
            }
            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
                Card { title: "Order Status Distribution", {distribution} }
                OrderFlowChart {}
            }
        }
    }
}

#[component]
fn StatusDistribution(overall: OverallStats) -> Element {
    let in_progress = overall
        .total_orders
        .saturating_sub(overall.completed_orders + overall.failed_orders + overall.pending_orders);
    let total = overall.total_orders.max(1) as f64;
    let slices = [
        ("Completed", overall.completed_orders, "bg-emerald-500"),
        ("Processing", in_progress, "bg-amber-500"),
        ("Pending", overall.pending_orders, "bg-slate-400"),
        ("Failed", overall.failed_orders, "bg-rose-500"),
    ];

    rsx! {
        div { class: "space-y-3",
            for (name, count, color) in slices {
                {
                    let width = count as f64 * 100.0 / total;
                    rsx! {
                        div { key: "{name}", class: "flex items-center gap-3 text-sm",
                            div { class: "h-3 w-3 rounded-full {color}" }
                            span { class: "w-24 text-slate-300", "{name}" }
                            div { class: "h-2 flex-1 rounded bg-slate-800",
                                div { class: "h-2 rounded {color}", style: "width: {width}%" }
                            }
                            span { class: "w-12 text-right text-slate-400", "{count}" }
                        }
                    }
                }
            }
        }
    }
}
