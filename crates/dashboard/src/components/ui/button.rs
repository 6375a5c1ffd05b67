use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(optional)]
    pub class: Option<String>,
    #[props(optional)]
    pub variant: Option<ButtonVariant>,
    #[props(optional)]
    pub size: Option<ButtonSize>,
    #[props(optional)]
    pub disabled: Option<bool>,
    #[props(optional)]
    pub title: Option<String>,
    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant = props.variant.unwrap_or_default();
    let disabled = props.disabled.unwrap_or(false);

    let base = "inline-flex items-center justify-center gap-2 rounded-lg font-medium transition-colors duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-slate-900 disabled:opacity-50 disabled:pointer-events-none";

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-gradient-to-r from-sky-500 to-indigo-600 text-white hover:from-sky-400 hover:to-indigo-500 focus:ring-sky-500",
        ButtonVariant::Outline => "border border-slate-600 bg-transparent text-slate-200 hover:bg-slate-800 focus:ring-slate-500",
        ButtonVariant::Ghost => "bg-transparent text-slate-300 hover:bg-slate-800 hover:text-white focus:ring-slate-500",
    };

    let size_class = match props.size.unwrap_or_default() {
        ButtonSize::Small => "px-3 py-1.5 text-xs",
        ButtonSize::Medium => "px-4 py-2 text-sm",
    };

    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{base} {variant_class} {size_class} {extra}"),
        _ => format!("{base} {variant_class} {size_class}"),
    };

    rsx! {
        button {
            class,
            r#type: "button",
            title: props.title.unwrap_or_default(),
            disabled,
            onclick: move |evt| {
                if disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
