use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not found | Scientific Works Registry" }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 pt-16",
                p { class: "text-2xl font-bold", "Page not found" }
                p { class: "opacity-70", "/{path}" }
                Link { to: Route::Home {}, class: "btn btn-primary", "Go home" }
            }
        }
    )
}
