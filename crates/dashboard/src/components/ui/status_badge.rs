use dioxus::prelude::*;
use pulse_shared::StatusTone;

/// Pill showing a backend status with a colour derived from its meaning.
#[component]
pub fn StatusBadge(status: String) -> Element {
    let tone = match StatusTone::classify(&status) {
        StatusTone::Success => "bg-emerald-500/15 text-emerald-400 border-emerald-500/30",
        StatusTone::Warning => "bg-amber-500/15 text-amber-400 border-amber-500/30",
        StatusTone::Danger => "bg-rose-500/15 text-rose-400 border-rose-500/30",
        StatusTone::Neutral => "bg-slate-500/15 text-slate-300 border-slate-500/30",
    };
    let label = if status.trim().is_empty() {
        "unknown".to_string()
    } else {
        status.replace('_', " ")
    };

    rsx! {
        span { class: "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-medium capitalize {tone}",
            "{label}"
        }
    }
}
