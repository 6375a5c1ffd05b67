use dioxus::prelude::*;
use pulse_client::{FetchState, OrderFlowEndpoint};

use crate::components::dashboard::ErrorBanner;
use crate::hooks::use_fetch;

/// Hourly order volume as horizontal bars, split into completed / failed /
/// in-progress.
#[component]
pub fn OrderFlowChart() -> Element {
    let flow = use_fetch(|| OrderFlowEndpoint);

    let body = match flow.state() {
        FetchState::Idle | FetchState::Loading => rsx! {
            p { class: "text-sm text-slate-400", "Loading order flow..." }
        },
        FetchState::Error(message) => rsx! {
            ErrorBanner {
                message,
                on_retry: move |_| flow.refetch(),
            }
        },
        FetchState::Success(points) if points.is_empty() => rsx! {
            p { class: "text-sm text-slate-400", "No orders in the last hours." }
        },
        FetchState::Success(points) => {
            let peak = points.iter().map(|p| p.orders).max().unwrap_or(0).max(1);
            rsx! {
                div { class: "space-y-2",
                    for point in points {
                        {
                            let pct = |n: u64| n as f64 * 100.0 / peak as f64;
                            let completed = pct(point.completed);
                            let failed = pct(point.failed);
                            let rest = pct(point.orders.saturating_sub(point.completed + point.failed));
                            rsx! {
                                div { key: "{point.hour}", class: "flex items-center gap-3 text-xs",
                                    span { class: "w-14 shrink-0 text-slate-400", "{point.hour}" }
                                    div { class: "flex h-3 flex-1 overflow-hidden rounded bg-slate-800",
                                        div { class: "bg-emerald-500", style: "width: {completed}%" }
                                        div { class: "bg-rose-500", style: "width: {failed}%" }
                                        div { class: "bg-sky-500", style: "width: {rest}%" }
                                    }
                                    span { class: "w-8 text-right text-slate-300", "{point.orders}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "rounded-xl border border-slate-700/60 bg-slate-900 p-6",
            h3 { class: "mb-6 text-lg font-semibold text-white", "Order Flow" }
            {body}
        }
    }
}
