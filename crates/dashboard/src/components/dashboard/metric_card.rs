use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Primary,
    Success,
    Warning,
    Danger,
}

impl Accent {
    fn class(self) -> &'static str {
        match self {
            Accent::Primary => "from-sky-500 to-indigo-600",
            Accent::Success => "from-emerald-500 to-teal-600",
            Accent::Warning => "from-amber-500 to-orange-600",
            Accent::Danger => "from-rose-500 to-red-600",
        }
    }
}

/// Headline number with a coloured marker.
#[component]
pub fn MetricCard(
    title: String,
    value: String,
    #[props(default)] accent: Accent,
    #[props(default)] loading: bool,
) -> Element {
    let accent = accent.class();
    let shown = if loading { "...".to_string() } else { value };

    rsx! {
        div { class: "rounded-xl border border-slate-700/60 bg-slate-900 p-6 transition-transform hover:scale-[1.02]",
            div { class: "mb-4 h-10 w-10 rounded-lg bg-gradient-to-br {accent}" }
            h3 { class: "mb-1 text-2xl font-bold text-white", "{shown}" }
            p { class: "text-sm text-slate-400", "{title}" }
        }
    }
}
