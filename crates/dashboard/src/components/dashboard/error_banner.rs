use dioxus::prelude::*;

use crate::components::ui::{Button, ButtonSize, ButtonVariant};

/// Inline failure notice with an optional Retry button.
#[component]
pub fn ErrorBanner(
    message: String,
    #[props(optional)] context: Option<String>,
    #[props(optional)] on_retry: Option<EventHandler<()>>,
) -> Element {
    let text = match context {
        Some(context) => format!("Error loading {context}: {message}"),
        None => message,
    };

    rsx! {
        div { class: "flex items-center justify-between gap-4 rounded-lg border border-rose-500/30 bg-rose-500/10 px-4 py-3 text-rose-300",
            span { "{text}" }
            if let Some(on_retry) = on_retry {
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
