use dioxus::prelude::*;
use pulse_client::{FetchState, ListEndpoint};
use pulse_shared::TargetOrder;

use crate::components::dashboard::{ErrorBanner, PageHeader};
use crate::components::ui::{Card, StatusBadge};
use crate::hooks::use_fetch;

#[component]
pub fn TargetOrdersView() -> Element {
    let orders = use_fetch(ListEndpoint::<TargetOrder>::target_orders);
    let loading = orders.is_loading();

    let body = match orders.state() {
        FetchState::Idle | FetchState::Loading => rsx! {
            p { class: "text-slate-400", "Loading target orders..." }
        },
        FetchState::Error(message) => rsx! {
            ErrorBanner {
                message,
                context: "target orders",
                on_retry: {
                    let orders = orders.clone();
                    move |_| orders.refetch()
                },
            }
        },
        FetchState::Success(page) if page.is_empty() => rsx! {
            Card { p { class: "py-8 text-center text-slate-400", "No target orders yet." } }
        },
        FetchState::Success(page) => {
            let description = page
                .pagination
                .as_ref()
                .map(|p| p.summary())
                .unwrap_or_else(|| format!("{} target orders", page.len()));
            rsx! {
                Card { title: "Target Orders", description,
                    table { class: "w-full text-sm",
                        thead {
                            tr { class: "border-b border-slate-700/60 text-left text-slate-400",
                                th { class: "px-4 py-3 font-medium", "Order No" }
                                th { class: "px-4 py-3 font-medium", "Katana ID" }
                                th { class: "px-4 py-3 font-medium", "Status" }
                                th { class: "px-4 py-3 font-medium", "Created" }
                                th { class: "px-4 py-3 font-medium", "Updated" }
                            }
                        }
                        tbody {
                            for order in page.items {
                                tr { key: "{order.id}", class: "border-b border-slate-800 hover:bg-slate-800/40",
                                    td { class: "px-4 py-3 font-medium text-white", "{order.order_no}" }
                                    td { class: "px-4 py-3 text-slate-300",
                                        {order.katana_order_id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())}
                                    }
                                    td { class: "px-4 py-3", StatusBadge { status: order.status.clone() } }
                                    td { class: "px-4 py-3 text-slate-400",
                                        {order.created_at.clone().unwrap_or_else(|| "-".to_string())}
                                    }
                                    td { class: "px-4 py-3 text-slate-400",
                                        {order.updated_at.clone().unwrap_or_else(|| "-".to_string())}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "Target Orders",
                subtitle: "Orders forwarded to the DCL fulfilment target.",
                loading,
                on_refresh: {
                    let orders = orders.clone();
                    move |_| orders.refetch()
                },
            }
            {body}
        }
    }
}
