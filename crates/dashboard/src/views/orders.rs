use dioxus::prelude::*;

use crate::components::dashboard::PageHeader;
use crate::components::ui::Card;
use crate::Route;

#[component]
pub fn Orders() -> Element {
    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "Orders",
                subtitle: "Manage all your orders and their status.",
            }
            Card { class: "flex min-h-96 items-center justify-center",
                div { class: "text-center",
                    h3 { class: "mb-2 text-lg font-semibold text-white", "Orders Management" }
                    p { class: "mb-4 text-slate-400", "Katana orders are listed by type." }
                    div { class: "flex justify-center gap-4 text-sm text-sky-400",
                        Link { to: Route::SalesOrdersView {}, "Sales orders" }
                        Link { to: Route::PurchaseOrdersView {}, "Purchase orders" }
                        Link { to: Route::StockTransfersView {}, "Stock transfers" }
                        Link { to: Route::TargetOrdersView {}, "Target orders" }
                    }
                }
            }
        }
    }
}
