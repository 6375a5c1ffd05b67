//! Sales orders: filter panel, summary tiles, paged table.

use dioxus::prelude::*;
use pulse_client::{FetchState, SalesOrderFilterOptionsEndpoint};
use pulse_shared::{
    format_money, FilterOptions, SalesOrderFilters, SalesOrdersPage, StatusTone,
    DEFAULT_PAGE_SIZE, PAGE_SIZES,
};

use crate::components::dashboard::{ErrorBanner, PageHeader, PaginationBar};
use crate::components::ui::{Button, ButtonSize, ButtonVariant, Card, StatusBadge};
use crate::hooks::{use_fetch, use_sales_orders, UseSalesOrders};

const SELECT_CLASS: &str = "w-full rounded-lg border border-slate-700 bg-slate-800 px-3 py-2 text-sm text-slate-100";

#[component]
pub fn SalesOrdersView() -> Element {
    let orders = use_sales_orders(|| SalesOrderFilters::first_page(DEFAULT_PAGE_SIZE));
    let options = use_fetch(|| SalesOrderFilterOptionsEndpoint);
    let mut show_filters = use_signal(|| false);

    let state = orders.state();
    let loading = state.is_loading();
    let page = state.data().cloned();
    let total_note = page
        .as_ref()
        .and_then(|p| p.pagination.as_ref())
        .map(|p| format!(" ({} total orders)", p.total_count))
        .unwrap_or_default();
    let show_notice = page
        .as_ref()
        .and_then(|p| p.pagination.as_ref())
        .is_some_and(|p| p.is_large_dataset());

    let body = match state {
        FetchState::Error(message) => rsx! {
            ErrorBanner {
                message,
                context: "sales orders",
                on_retry: {
                    let orders = orders.clone();
                    move |_| orders.refetch()
                },
            }
        },
        FetchState::Idle | FetchState::Loading => rsx! { LoadingTiles {} },
        FetchState::Success(page) => rsx! {
            SummaryTiles { page: page.clone() }
            OrdersTable { page, orders: orders.clone() }
        },
    };

    rsx! {
        div { class: "space-y-6",
            if show_notice {
                div { class: "rounded-lg border border-amber-500/30 bg-amber-500/10 px-4 py-3 text-amber-300",
                    span { class: "font-medium", "Performance Notice: " }
                    "You're viewing a large dataset. Consider using filters to narrow down results for better performance."
                }
            }

            PageHeader {
                title: "Sales Orders",
                subtitle: "Manage sales orders from Katana DCL system.{total_note}",
                loading,
                on_refresh: {
                    let orders = orders.clone();
                    move |_| orders.refetch()
                },
                extra: rsx! {
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: move |_| show_filters.toggle(),
                        "Filters"
                    }
                },
            }

            if show_filters() {
                FilterPanel {
                    orders: orders.clone(),
                    options: options.state().into_data().unwrap_or_default(),
                }
            }

            {body}
        }
    }
}

#[component]
fn FilterPanel(orders: UseSalesOrders, options: FilterOptions) -> Element {
    let held = orders.filters();
    let mut date_filter = use_signal(|| held.date_filter.clone().unwrap_or_default());
    let mut order_number = use_signal(|| held.order_number.clone().unwrap_or_default());
    let mut status = use_signal(|| held.status.clone().unwrap_or_default());
    let mut dcl_status = use_signal(|| held.dcl_status.clone().unwrap_or_default());
    let loading = orders.is_loading();

    let apply = {
        let orders = orders.clone();
        move |_| {
            // Blank values are sent as Some("") so they replace the held ones.
            orders.apply_filters(SalesOrderFilters {
                date_filter: Some(date_filter()),
                order_number: Some(order_number()),
                status: Some(status()),
                dcl_status: Some(dcl_status()),
                ..Default::default()
            });
        }
    };
    let clear = {
        let orders = orders.clone();
        move |_| {
            date_filter.set(String::new());
            order_number.set(String::new());
            status.set(String::new());
            dcl_status.set(String::new());
            orders.clear_filters();
        }
    };

    rsx! {
        Card { title: "Filters",
            div { class: "grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-4",
                div { class: "space-y-2",
                    label { class: "text-sm font-medium", "Date Range" }
                    select {
                        class: SELECT_CLASS,
                        value: "{date_filter}",
                        onchange: move |evt| date_filter.set(evt.value()),
                        option { value: "", "All Dates" }
                        for choice in options.date_filters.iter() {
                            option { key: "{choice.value}", value: "{choice.value}", "{choice.label}" }
                        }
                    }
                }
                div { class: "space-y-2",
                    label { class: "text-sm font-medium", "Order Number" }
                    input {
                        class: SELECT_CLASS,
                        placeholder: "Search order number...",
                        value: "{order_number}",
                        oninput: move |evt| order_number.set(evt.value()),
                    }
                }
                div { class: "space-y-2",
                    label { class: "text-sm font-medium", "Status" }
                    select {
                        class: SELECT_CLASS,
                        value: "{status}",
                        onchange: move |evt| status.set(evt.value()),
                        option { value: "", "All Statuses" }
                        for choice in options.statuses.iter() {
                            option { key: "{choice}", value: "{choice}", "{choice}" }
                        }
                    }
                }
                div { class: "space-y-2",
                    label { class: "text-sm font-medium", "DCL Status" }
                    select {
                        class: SELECT_CLASS,
                        value: "{dcl_status}",
                        onchange: move |evt| dcl_status.set(evt.value()),
                        option { value: "", "All DCL Statuses" }
                        for choice in options.dcl_statuses.iter() {
                            option { key: "{choice}", value: "{choice}", "{choice}" }
                        }
                    }
                }
            }
            div { class: "mt-4 flex items-center gap-2",
                Button { disabled: loading, onclick: apply, "Apply Filters" }
                Button { variant: ButtonVariant::Outline, onclick: clear, "Clear Filters" }
            }
        }
    }
}

#[component]
fn LoadingTiles() -> Element {
    rsx! {
        div { class: "grid gap-6 md:grid-cols-2 lg:grid-cols-4",
            for i in 0..4 {
                div { key: "{i}", class: "animate-pulse rounded-xl border border-slate-700/60 bg-slate-900 p-6",
                    div { class: "mb-2 h-4 w-3/4 rounded bg-slate-800" }
                    div { class: "mb-4 h-3 w-1/2 rounded bg-slate-800" }
                    div { class: "h-8 w-1/3 rounded bg-slate-800" }
                }
            }
        }
    }
}

/// Status the table shows: the live Katana status wins over the stored one.
fn effective_status(order: &pulse_shared::SalesOrder) -> String {
    order
        .katana_order_data
        .status
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| order.status.clone())
}

#[component]
fn SummaryTiles(page: SalesOrdersPage) -> Element {
    let on_page = page.orders.len();
    let page_note = page
        .pagination
        .as_ref()
        .map(|p| format!("Page {} of {}", p.current_page, p.total_pages))
        .unwrap_or_else(|| "Active sales orders".to_string());
    let completed = page
        .orders
        .iter()
        .filter(|o| StatusTone::classify(&o.status) == StatusTone::Success)
        .count();
    let pending = page
        .orders
        .iter()
        .filter(|o| StatusTone::classify(&effective_status(o)) == StatusTone::Warning)
        .count();
    let value: f64 = page.orders.iter().map(|o| o.display_total()).sum();
    let currency = page
        .orders
        .first()
        .map(|o| o.display_currency().to_string())
        .unwrap_or_else(|| "USD".to_string());
    let value = format_money(value, &currency);

    rsx! {
        div { class: "grid gap-6 md:grid-cols-2 lg:grid-cols-4",
            Tile { title: "Total Orders", value: on_page.to_string(), note: page_note }
            Tile { title: "Completed", value: completed.to_string(), note: "Successfully completed" }
            Tile { title: "Pending", value: pending.to_string(), note: "Awaiting shipment" }
            Tile { title: "Total Value", value, note: "Total order value" }
        }
    }
}

#[component]
fn Tile(title: String, value: String, note: String) -> Element {
    rsx! {
        div { class: "rounded-xl border border-slate-700/60 bg-slate-900 p-6",
            p { class: "pb-2 text-sm font-medium text-slate-300", "{title}" }
            div { class: "text-2xl font-bold text-white", "{value}" }
            p { class: "text-xs text-slate-400", "{note}" }
        }
    }
}

#[component]
fn OrdersTable(page: SalesOrdersPage, orders: UseSalesOrders) -> Element {
    let description = match &page.pagination {
        Some(p) => format!("Showing {} of {} orders", page.orders.len(), p.total_count),
        None => format!("{} orders", page.orders.len()),
    };
    let page_size = orders.page_size();
    let loading = orders.is_loading();

    let size_select = {
        let orders = orders.clone();
        rsx! {
            span { class: "text-sm text-slate-400", "Show:" }
            select {
                class: "w-20 rounded-lg border border-slate-700 bg-slate-800 px-2 py-1 text-sm",
                value: "{page_size}",
                onchange: move |evt| {
                    if let Ok(size) = evt.value().parse::<u32>() {
                        orders.set_page_size(size);
                    }
                },
                for size in PAGE_SIZES {
                    option { key: "{size}", value: "{size}", "{size}" }
                }
            }
        }
    };

    rsx! {
        Card { title: "Sales Orders", description, actions: size_select,
            if page.orders.is_empty() {
                p { class: "py-8 text-center text-slate-400", "No sales orders match the current filters." }
            } else {
                div { class: "overflow-x-auto",
                    table { class: "w-full text-sm",
                        thead {
                            tr { class: "border-b border-slate-700/60 text-left text-slate-400",
                                th { class: "px-4 py-3 font-medium", "Order Number" }
                                th { class: "px-4 py-3 font-medium", "Customer" }
                                th { class: "px-4 py-3 font-medium", "Status" }
                                th { class: "px-4 py-3 font-medium", "DCL Status" }
                                th { class: "px-4 py-3 font-medium", "Items" }
                                th { class: "px-4 py-3 font-medium", "Total" }
                                th { class: "px-4 py-3 font-medium", "Order Date" }
                            }
                        }
                        tbody {
                            for order in page.orders.iter() {
                                tr { key: "{order.id}", class: "border-b border-slate-800 hover:bg-slate-800/40",
                                    td { class: "px-4 py-3 font-medium text-white",
                                        if order.katana_order_number.is_empty() { "N/A" } else { "{order.katana_order_number}" }
                                    }
                                    td { class: "px-4 py-3 text-slate-200",
                                        {order.customer().unwrap_or_else(|| "N/A".to_string())}
                                    }
                                    td { class: "px-4 py-3", StatusBadge { status: effective_status(order) } }
                                    td { class: "px-4 py-3",
                                        StatusBadge { status: order.dcl_status.clone().unwrap_or_default() }
                                    }
                                    td { class: "px-4 py-3 text-slate-300", "{order.line_count()}" }
                                    td { class: "px-4 py-3 text-slate-200",
                                        {format_money(order.display_total(), order.display_currency())}
                                    }
                                    td { class: "px-4 py-3 text-slate-400",
                                        {order.order_created_date.clone().or_else(|| order.created_at.clone()).unwrap_or_else(|| "N/A".to_string())}
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(pagination) = page.pagination.clone() {
                PaginationBar {
                    pagination,
                    disabled: loading,
                    on_page: move |n| orders.go_to_page(n),
                }
            }
        }
    }
}
