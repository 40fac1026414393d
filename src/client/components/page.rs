use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or("");

    rsx!(
        main {
            class: "flex-1 p-6 {class}",
            div { class: "w-full max-w-[1200px] mx-auto",
                {children}
            }
        }
    )
}
