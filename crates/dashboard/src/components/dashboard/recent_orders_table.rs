use chrono::Utc;
use dioxus::prelude::*;
use pulse_client::{FetchState, RecentOrdersEndpoint};
use pulse_shared::{format_money, time_ago};

use crate::components::ui::StatusBadge;
use crate::hooks::{use_client_config, use_polled_fetch};
use crate::Route;

#[component]
pub fn RecentOrdersTable() -> Element {
    let config = use_client_config();
    let limit = config.recent_orders_limit;
    let orders = use_polled_fetch(move || RecentOrdersEndpoint { limit }, config.poll_interval);
    let nav = use_navigator();

    let body = match orders.state() {
        FetchState::Idle | FetchState::Loading => rsx! {
            div { class: "px-4 py-3 text-sm text-slate-400", "Loading recent orders..." }
        },
        FetchState::Error(message) => rsx! {
            div { class: "px-4 py-3 text-sm text-rose-400", "Error: {message}" }
        },
        FetchState::Success(rows) => {
            let now = Utc::now();
            rsx! {
                div { class: "overflow-x-auto",
                    table { class: "w-full",
                        thead {
                            tr { class: "border-b border-slate-700/60 text-left text-sm text-slate-400",
                                th { class: "px-4 py-3 font-medium", "Order" }
                                th { class: "px-4 py-3 font-medium", "Customer" }
                                th { class: "px-4 py-3 font-medium", "Status" }
                                th { class: "px-4 py-3 font-medium", "Amount" }
                                th { class: "px-4 py-3 font-medium", "Time" }
                            }
                        }
                        tbody {
                            for order in rows {
                                tr { key: "{order.id}", class: "border-b border-slate-800 text-sm hover:bg-slate-800/40",
                                    td { class: "px-4 py-3 font-medium text-white",
                                        if order.order_number.is_empty() { "N/A" } else { "{order.order_number}" }
                                    }
                                    td { class: "px-4 py-3 text-slate-200",
                                        {order.customer.clone().unwrap_or_else(|| "N/A".to_string())}
                                    }
                                    td { class: "px-4 py-3", StatusBadge { status: order.status.clone() } }
                                    td { class: "px-4 py-3 text-slate-200",
                                        {format_money(order.total.unwrap_or(0.0), order.currency.as_deref().unwrap_or("USD"))}
                                    }
                                    td { class: "px-4 py-3 text-slate-400",
                                        {order.created_at.as_deref().map(|raw| time_ago(raw, now)).unwrap_or_else(|| "N/A".to_string())}
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
        div { class: "rounded-xl border border-slate-700/60 bg-slate-900 p-6",
            div { class: "mb-6 flex items-center justify-between",
                h3 { class: "text-lg font-semibold text-white", "Recent Orders" }
                button {
                    class: "text-sm text-sky-400 transition-colors hover:text-sky-300",
                    onclick: move |_| {
                        nav.push(Route::SalesOrdersView {});
                    },
                    "View All"
                }
            }
            {body}
        }
    }
}
