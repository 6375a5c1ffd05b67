//! Shell shared by every page: top header plus collapsible sidebar.

use dioxus::prelude::*;

use crate::components::ui::{Button, ButtonVariant};
use crate::Route;

struct MenuItem {
    title: &'static str,
    route: Route,
}

fn menu() -> [MenuItem; 11] {
    [
        MenuItem { title: "Dashboard", route: Route::Dashboard {} },
        MenuItem { title: "Orders", route: Route::Orders {} },
        MenuItem { title: "Sales Orders", route: Route::SalesOrdersView {} },
        MenuItem { title: "Purchase Orders", route: Route::PurchaseOrdersView {} },
        MenuItem { title: "Stock Transfers", route: Route::StockTransfersView {} },
        MenuItem { title: "Target Orders", route: Route::TargetOrdersView {} },
        MenuItem { title: "Analytics", route: Route::Analytics {} },
        MenuItem { title: "Customers", route: Route::Customers {} },
        MenuItem { title: "Shipping", route: Route::Shipping {} },
        MenuItem { title: "Alerts", route: Route::Alerts {} },
        MenuItem { title: "Settings", route: Route::Settings {} },
    ]
}

#[component]
pub fn DashboardLayout() -> Element {
    let mut sidebar_open = use_signal(|| true);
    let open = sidebar_open();

    let main_class = if open { "ml-64" } else { "ml-0" };

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100",
            Header { on_toggle: move |_| sidebar_open.toggle() }
            div { class: "flex",
                Sidebar { open }
                main { class: "flex-1 transition-all duration-300 ease-in-out {main_class}",
                    div { class: "p-6", Outlet::<Route> {} }
                }
            }
        }
    }
}

#[component]
fn Header(on_toggle: EventHandler<()>) -> Element {
    rsx! {
        header { class: "sticky top-0 z-50 flex h-16 items-center justify-between border-b border-slate-800 bg-slate-900 px-6",
            div { class: "flex items-center gap-4",
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Toggle sidebar",
                    onclick: move |_| on_toggle.call(()),
                    "☰"
                }
                div { class: "flex items-center gap-2",
                    div { class: "flex h-8 w-8 items-center justify-center rounded-lg bg-gradient-to-br from-sky-500 to-indigo-600",
                        span { class: "text-sm font-bold text-white", "K" }
                    }
                    div {
                        h1 { class: "text-xl font-bold text-white", "Katana DCL" }
                        p { class: "text-xs text-slate-400", "Pulse Dashboard" }
                    }
                }
            }
        }
    }
}

#[component]
fn Sidebar(open: bool) -> Element {
    let current = use_route::<Route>();
    let width = if open {
        "w-64 translate-x-0"
    } else {
        "w-0 -translate-x-full"
    };

    rsx! {
        aside { class: "fixed left-0 top-16 z-40 h-[calc(100vh-4rem)] border-r border-slate-800 bg-slate-900 transition-all duration-300 ease-in-out {width}",
            div { class: "h-full overflow-hidden",
                nav { class: "space-y-1 p-4",
                    for item in menu() {
                        {
                            let active = if item.route == current {
                                "bg-sky-500/15 text-sky-300"
                            } else {
                                "text-slate-300 hover:bg-slate-800 hover:text-white"
                            };
                            rsx! {
                                Link {
                                    key: "{item.title}",
                                    to: item.route,
                                    class: "flex items-center rounded-lg px-3 py-2 text-sm font-medium {active}",
                                    "{item.title}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
