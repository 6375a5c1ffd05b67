use dioxus::prelude::*;
use pulse_client::{FetchState, ListEndpoint};
use pulse_shared::{format_money, StatusTone, StockTransfer};

use crate::components::dashboard::{ErrorBanner, MetricCard, PageHeader, Accent};
use crate::components::ui::{Card, StatusBadge};
use crate::hooks::use_fetch;

#[component]
pub fn StockTransfersView() -> Element {
    let transfers = use_fetch(ListEndpoint::<StockTransfer>::stock_transfers);
    let loading = transfers.is_loading();

    let body = match transfers.state() {
        FetchState::Idle | FetchState::Loading => rsx! {
            p { class: "text-slate-400", "Loading stock transfers..." }
        },
        FetchState::Error(message) => rsx! {
            ErrorBanner {
                message,
                context: "stock transfers",
                on_retry: {
                    let transfers = transfers.clone();
                    move |_| transfers.refetch()
                },
            }
        },
        FetchState::Success(page) => {
            let completed = page
                .items
                .iter()
                .filter(|t| StatusTone::classify(&t.status) == StatusTone::Success)
                .count();
            let in_transit = page
                .items
                .iter()
                .filter(|t| t.status.eq_ignore_ascii_case("in_transit"))
                .count();
            let value: f64 = page.items.iter().map(|t| t.total_cost).sum();
            let description = page
                .pagination
                .as_ref()
                .map(|p| p.summary())
                .unwrap_or_else(|| format!("{} transfers", page.len()));
            rsx! {
                div { class: "grid gap-6 md:grid-cols-2 lg:grid-cols-4",
                    MetricCard { title: "Total Transfers", value: page.len().to_string() }
                    MetricCard { title: "Completed", value: completed.to_string(), accent: Accent::Success }
                    MetricCard { title: "In Transit", value: in_transit.to_string(), accent: Accent::Warning }
                    MetricCard { title: "Total Value", value: format_money(value, "USD") }
                }
                Card { title: "Stock Transfer Orders", description,
                    table { class: "w-full text-sm",
                        thead {
                            tr { class: "border-b border-slate-700/60 text-left text-slate-400",
                                th { class: "px-4 py-3 font-medium", "Transfer" }
                                th { class: "px-4 py-3 font-medium", "Route" }
                                th { class: "px-4 py-3 font-medium", "Status" }
                                th { class: "px-4 py-3 font-medium", "Quantity" }
                                th { class: "px-4 py-3 font-medium", "Cost" }
                                th { class: "px-4 py-3 font-medium", "Date" }
                            }
                        }
                        tbody {
                            for transfer in page.items {
                                tr { key: "{transfer.record_id}", class: "border-b border-slate-800 hover:bg-slate-800/40",
                                    td { class: "px-4 py-3 font-medium text-white", "{transfer.stock_transfer_number}" }
                                    td { class: "px-4 py-3 text-slate-300",
                                        {format!(
                                            "{} → {}",
                                            transfer.source_location_id.map(|id| id.to_string()).unwrap_or_else(|| "?".into()),
                                            transfer.target_location_id.map(|id| id.to_string()).unwrap_or_else(|| "?".into()),
                                        )}
                                    }
                                    td { class: "px-4 py-3", StatusBadge { status: transfer.status.clone() } }
                                    td { class: "px-4 py-3 text-slate-300", "{transfer.total_quantity}" }
                                    td { class: "px-4 py-3 text-slate-200", {format_money(transfer.total_cost, "USD")} }
                                    td { class: "px-4 py-3 text-slate-400",
                                        {transfer.transfer_date.clone().unwrap_or_else(|| "-".to_string())}
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
                title: "Stock Transfers",
                subtitle: "Inventory moved between Katana locations.",
                loading,
                on_refresh: {
                    let transfers = transfers.clone();
                    move |_| transfers.refetch()
                },
            }
            {body}
        }
    }
}
