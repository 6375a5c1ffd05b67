use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    use_hook(|| pulse_client::log_warn!("404: no route for /{}", segments.join("/")));

    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-slate-950",
            div { class: "text-center",
                h1 { class: "mb-4 text-4xl font-bold text-white", "404" }
                p { class: "mb-4 text-xl text-slate-400", "Oops! Page not found" }
                Link { to: Route::Dashboard {}, class: "text-sky-400 underline hover:text-sky-300", "Return to Home" }
            }
        }
    }
}
