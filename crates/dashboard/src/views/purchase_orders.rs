use dioxus::prelude::*;
use pulse_client::{FetchState, ListEndpoint};
use pulse_shared::{format_money, PurchaseOrder};

use crate::components::dashboard::{ErrorBanner, PageHeader};
use crate::components::ui::{Card, StatusBadge};
use crate::hooks::use_fetch;

#[component]
pub fn PurchaseOrdersView() -> Element {
    let orders = use_fetch(ListEndpoint::<PurchaseOrder>::purchase_orders);
    let loading = orders.is_loading();

    let body = match orders.state() {
        FetchState::Idle | FetchState::Loading => rsx! {
            p { class: "text-slate-400", "Loading purchase orders..." }
        },
        FetchState::Error(message) => rsx! {
            ErrorBanner {
                message,
                context: "purchase orders",
                on_retry: {
                    let orders = orders.clone();
                    move |_| orders.refetch()
                },
            }
        },
        FetchState::Success(page) => {
            let description = page
                .pagination
                .as_ref()
                .map(|p| p.summary())
                .unwrap_or_else(|| format!("{} purchase orders", page.len()));
            rsx! {
                Card { title: "Purchase Orders", description,
                    table { class: "w-full text-sm",
                        thead {
                            tr { class: "border-b border-slate-700/60 text-left text-slate-400",
                                th { class: "px-4 py-3 font-medium", "PO Number" }
                                th { class: "px-4 py-3 font-medium", "Status" }
                                th { class: "px-4 py-3 font-medium", "Ordered" }
                                th { class: "px-4 py-3 font-medium", "Received" }
                                th { class: "px-4 py-3 font-medium", "Fulfilled" }
                                th { class: "px-4 py-3 font-medium", "Total" }
                                th { class: "px-4 py-3 font-medium", "Expected" }
                            }
                        }
                        tbody {
                            for po in page.items {
                                tr { key: "{po.id}", class: "border-b border-slate-800 hover:bg-slate-800/40",
                                    td { class: "px-4 py-3 font-medium text-white", "{po.po_number}" }
                                    td { class: "px-4 py-3",
                                        StatusBadge { status: po.katana_status.clone().unwrap_or_else(|| po.status.clone()) }
                                    }
                                    td { class: "px-4 py-3 text-slate-300", "{po.quantity_ordered}" }
                                    td { class: "px-4 py-3 text-slate-300", "{po.quantity_received}" }
                                    td { class: "px-4 py-3 text-slate-300", {format!("{:.0}%", po.fulfillment_percentage)} }
                                    td { class: "px-4 py-3 text-slate-200", {format_money(po.total, "USD")} }
                                    td { class: "px-4 py-3 text-slate-400",
                                        {po.expected_arrival_date.clone().unwrap_or_else(|| "-".to_string())}
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
                title: "Purchase Orders",
                subtitle: "Inbound orders placed with suppliers.",
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
