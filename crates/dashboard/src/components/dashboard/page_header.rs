use dioxus::prelude::*;

use crate::components::ui::{Button, ButtonSize, ButtonVariant};

/// Page title row with an optional Refresh button.
#[component]
pub fn PageHeader(
    title: String,
    subtitle: String,
    #[props(default)] loading: bool,
    #[props(optional)] on_refresh: Option<EventHandler<()>>,
    #[props(optional)] extra: Option<Element>,
) -> Element {
    let spin = if loading { "animate-spin" } else { "" };

    rsx! {
        div { class: "flex items-center justify-between",
            div {
                h1 { class: "text-3xl font-bold text-white", "{title}" }
                p { class: "text-slate-400", "{subtitle}" }
            }
            div { class: "flex items-center gap-2",
                if let Some(extra) = extra {
                    {extra}
                }
                if let Some(on_refresh) = on_refresh {
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        disabled: loading,
                        onclick: move |_| on_refresh.call(()),
                        span { class: "inline-block {spin}", "↻" }
                        "Refresh"
                    }
                }
            }
        }
    }
}
