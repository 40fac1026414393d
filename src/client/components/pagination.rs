use dioxus::prelude::*;

/// Number of page buttons shown at once.
const WINDOW: u32 = 5;

/// Page numbers to render around `current`, at most [`WINDOW`] of them.
pub fn page_window(current: u32, pages: u32) -> Vec<u32> {
    if pages == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, pages);
    let start = current
        .saturating_sub(WINDOW / 2)
        .max(1)
        .min(pages.saturating_sub(WINDOW - 1).max(1));
    let end = (start + WINDOW - 1).min(pages);

    (start..=end).collect()
}

/// Page selector, rendered only when there is more than one page.
#[component]
pub fn Pagination(page: u32, pages: u32, on_change: EventHandler<u32>) -> Element {
    if pages <= 1 {
        return rsx!();
    }

    rsx!(
        div { class: "join flex justify-center mt-6",
            button {
                class: "join-item btn",
                disabled: page <= 1,
                onclick: move |_| on_change.call(page.saturating_sub(1).max(1)),
                "«"
            }
            for number in page_window(page, pages) {
                button {
                    key: "{number}",
                    class: if number == page { "join-item btn btn-active" } else { "join-item btn" },
                    onclick: move |_| on_change.call(number),
                    "{number}"
                }
            }
            button {
                class: "join-item btn",
                disabled: page >= pages,
                onclick: move |_| on_change.call((page + 1).min(pages)),
                "»"
            }
        }
    )
}
