//! Sections without a backend yet.

use dioxus::prelude::*;

use crate::components::dashboard::PageHeader;
use crate::components::ui::Card;

#[component]
fn ComingSoon(title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "space-y-6",
            PageHeader { title: title.clone(), subtitle }
            Card { class: "flex min-h-96 items-center justify-center",
                p { class: "text-slate-400", "{title} is not connected yet." }
            }
        }
    }
}

#[component]
pub fn Customers() -> Element {
    rsx! { ComingSoon { title: "Customers", subtitle: "Customer accounts synced from Katana." } }
}

#[component]
pub fn Shipping() -> Element {
    rsx! { ComingSoon { title: "Shipping", subtitle: "Carrier and shipment tracking." } }
}

#[component]
pub fn Alerts() -> Element {
    rsx! { ComingSoon { title: "Alerts", subtitle: "Sync failures and DCL warnings." } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { ComingSoon { title: "Settings", subtitle: "Dashboard preferences." } }
}
