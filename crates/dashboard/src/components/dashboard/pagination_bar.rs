use dioxus::prelude::*;
use pulse_shared::Pagination;

use crate::components::ui::{Button, ButtonSize, ButtonVariant};

/// "Showing X to Y of Z" plus previous/next buttons.
#[component]
pub fn PaginationBar(
    pagination: Pagination,
    #[props(default)] disabled: bool,
    on_page: EventHandler<u32>,
) -> Element {
    let current = pagination.current_page.max(1);
    let total = pagination.total_pages.max(1);
    let summary = pagination.summary();

    rsx! {
        div { class: "mt-4 flex items-center justify-between text-sm text-slate-400",
            span { "{summary}" }
            div { class: "flex items-center gap-2",
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    disabled: disabled || !pagination.has_prev,
                    onclick: move |_| on_page.call(current.saturating_sub(1).max(1)),
                    "Previous"
                }
                span { "Page {current} of {total}" }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    disabled: disabled || !pagination.has_next,
                    onclick: move |_| on_page.call(current + 1),
                    "Next"
                }
            }
        }
    }
}
