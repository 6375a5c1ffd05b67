use dioxus::prelude::*;

/// Bordered panel with an optional heading row.
#[component]
pub fn Card(
    #[props(optional)] title: Option<String>,
    #[props(optional)] description: Option<String>,
    #[props(optional)] actions: Option<Element>,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let has_header = title.is_some() || description.is_some() || actions.is_some();

    rsx! {
        div { class: "rounded-xl border border-slate-700/60 bg-slate-900 p-6 {class}",
            if has_header {
                div { class: "mb-4 flex items-center justify-between gap-4",
                    div {
                        if let Some(title) = title {
                            h3 { class: "text-lg font-semibold text-white", "{title}" }
                        }
                        if let Some(description) = description {
                            p { class: "text-sm text-slate-400", "{description}" }
                        }
                    }
                    if let Some(actions) = actions {
                        div { class: "flex items-center gap-2", {actions} }
                    }
                }
            }
            {children}
        }
    }
}
