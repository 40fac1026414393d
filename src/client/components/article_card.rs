use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaAward;
use dioxus_free_icons::Icon;

use crate::{client::router::Route, model::article::Article};

#[component]
pub fn ArticleCard(article: Article) -> Element {
    let authors = article
        .authors
        .iter()
        .map(|author| author.author_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    rsx!(
        div { class: "card shadow-sm bg-base-100",
            div { class: "card-body",
                div { class: "flex gap-2",
                    if article.in_rinc {
                        span { class: "badge badge-primary", "RINC" }
                    }
                    if article.applied_for_award() {
                        span { class: "badge badge-warning flex gap-1",
                            Icon { width: 12, height: 12, icon: FaAward }
                            "Award"
                        }
                    }
                }
                h2 { class: "card-title", "{article.title}" }
                p { class: "text-sm opacity-70", "{article.year_pub} · ID {article.id}" }
                if !authors.is_empty() {
                    p { class: "text-sm", "{authors}" }
                }
                div { class: "card-actions justify-end",
                    Link {
                        to: Route::ArticleDetail { id: article.id },
                        class: "btn btn-outline btn-sm",
                        "Details"
                    }
                }
            }
        }
    )
}
