use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertKind {
    #[default]
    Error,
    Success,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "alert alert-error",
            Self::Success => "alert alert-success",
            Self::Info => "alert alert-info",
        }
    }
}

/// Inline message, dismissible when `on_close` is set.
#[component]
pub fn Alert(
    message: String,
    #[props(default)] kind: AlertKind,
    on_close: Option<EventHandler<()>>,
) -> Element {
    rsx!(
        div {
            role: "alert",
            class: "{kind.class()} flex justify-between mb-4",
            span { "{message}" }
            if let Some(on_close) = on_close {
                button {
                    class: "btn btn-ghost btn-xs",
                    r#type: "button",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
        }
    )
}
