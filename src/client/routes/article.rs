use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowLeft, FaAward, FaPenToSquare};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{Alert, Page},
        router::Route,
        store::Remote,
        util::use_api,
    },
    model::article::{Article, Author},
};

static LOAD_FAILED: &str = "Failed to load the article";

#[component]
pub fn ArticleDetail(id: i32) -> Element {
    let api = use_api();
    let mut article = use_signal(Remote::<Article>::default);

    let load = use_callback(move |id: i32| {
        let ticket = article.write().begin_fetch();
        let client = api.client();

        spawn(async move {
            match client.get_article(id).await {
                Ok(loaded) => {
                    article.write().apply(ticket, loaded);
                }
                Err(err) => {
                    tracing::error!("Failed to load article {}: {}", id, err);
                    article
                        .write()
                        .apply_failure(ticket, err.user_message(LOAD_FAILED));
                }
            }
        });
    });

    use_effect(use_reactive((&id,), move |(id,)| load.call(id)));

    let current = article.read();

    rsx!(
        Title { "Article {id} | Scientific Works Registry" }
        Page {
            Link { to: Route::Home {}, class: "btn btn-ghost btn-sm mb-4 flex gap-2 w-fit",
                Icon { width: 14, height: 14, icon: FaArrowLeft }
                "Back to articles"
            }
            if let Some(error) = current.error.clone() {
                Alert {
                    message: error,
                    on_close: move |_| article.write().dismiss_error(),
                }
                button {
                    class: "btn btn-outline btn-sm mb-4",
                    onclick: move |_| load.call(id),
                    "Retry"
                }
            }
            if let Some(loaded) = current.value.clone() {
                ArticleView { article: loaded }
            } else if current.loading {
                div { class: "flex justify-center p-8",
                    span { class: "loading loading-spinner loading-lg" }
                }
            }
        }
    )
}

#[component]
fn ArticleView(article: Article) -> Element {
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
                            "Applied for award"
                        }
                    }
                }
                h1 { class: "card-title text-2xl", "{article.title}" }
                div { class: "flex gap-6 text-sm opacity-70",
                    span { "Year: {article.year_pub}" }
                    span { "ID: {article.id}" }
                    span { "Authors: {article.authors.len()}" }
                }
                // TODO: wire to an update endpoint once the backend exposes PUT /articles/{id}
                div { class: "card-actions justify-end",
                    button { class: "btn btn-outline btn-sm flex gap-2", r#type: "button",
                        Icon { width: 14, height: 14, icon: FaPenToSquare }
                        "Edit"
                    }
                }
            }
        }
        h2 { class: "text-xl font-semibold mt-6 mb-2", "Authors" }
        div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
            for author in article.authors.iter().cloned() {
                AuthorCard { key: "{author.id}", author }
            }
        }
    )
}

#[component]
fn AuthorCard(author: Author) -> Element {
    rsx!(
        div { class: "card shadow-sm bg-base-100",
            div { class: "card-body flex-row gap-4",
                div { class: "avatar placeholder",
                    div { class: "bg-neutral text-neutral-content w-12 h-12 rounded-full",
                        span { "{author.initial()}" }
                    }
                }
                div { class: "flex flex-col gap-1",
                    p { class: "font-semibold", "{author.author_name}" }
                    p { class: "text-sm", "Contribution: {author.contribution}%" }
                    if let Some(department) = author.department.clone() {
                        p { class: "text-sm opacity-70", "{department}" }
                    }
                    if let Some(email) = author.email.clone() {
                        p { class: "text-sm opacity-70", "{email}" }
                    }
                    if let Some(phone) = author.phone.clone() {
                        p { class: "text-sm opacity-70", "{phone}" }
                    }
                    if author.applied_for_award {
                        span { class: "badge badge-warning",
                            if let Some(date) = author.award_applied_date {
                                "Award application: {date}"
                            } else {
                                "Applied for award"
                            }
                        }
                    }
                }
            }
        }
    )
}
