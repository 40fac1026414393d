use chrono::Datelike;
use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::{Alert, Page},
    error::Error,
    router::Route,
    store::{
        article_form::{ArticleForm, CREATE_FAILED, MIN_YEAR},
        FormStatus,
    },
    util::use_api,
};

#[component]
pub fn AddArticle() -> Element {
    let api = use_api();
    let mut form = use_signal(ArticleForm::default);
    let mut status = use_signal(FormStatus::default);
    let current_year = chrono::Local::now().year();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !status.write().begin() {
            return;
        }

        let article = match form.peek().validate(current_year) {
            Ok(article) => article,
            Err(err) => {
                status.write().fail(err.to_string());
                return;
            }
        };
        let client = api.client();

        spawn(async move {
            match client.create_article(&article).await {
                Ok(()) => {
                    tracing::info!("Created article {:?}", article.title);
                    status.write().finish();
                    navigator().push(Route::Home {});
                }
                Err(err) => {
                    tracing::error!("Failed to create article: {}", err);
                    status
                        .write()
                        .fail(Error::from(err).user_message(CREATE_FAILED));
                }
            }
        });
    };

    let total = form.read().display_total();
    let can_remove = form.read().can_remove_author();
    let authors = form.read().authors.clone();

    rsx!(
        Title { "Add article | Scientific Works Registry" }
        Page {
            div { class: "card shadow-sm bg-base-100 max-w-3xl mx-auto",
                form { class: "card-body gap-3", onsubmit: on_submit,
                    h1 { class: "card-title text-2xl", "Add a new article" }
                    if let Some(error) = status.read().error.clone() {
                        Alert {
                            message: error,
                            on_close: move |_| status.write().dismiss_error(),
                        }
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "Title",
                        required: true,
                        value: "{form.read().title}",
                        oninput: move |evt| form.write().title = evt.value(),
                    }
                    div { class: "flex gap-4 items-center",
                        input {
                            class: "input input-bordered",
                            r#type: "number",
                            placeholder: "Publication year",
                            min: "{MIN_YEAR}",
                            max: "{current_year + 1}",
                            required: true,
                            value: form.read().year.map(|year| year.to_string()).unwrap_or_default(),
                            oninput: move |evt| form.write().set_year(&evt.value()),
                        }
                        label { class: "flex gap-2 items-center",
                            input {
                                class: "checkbox",
                                r#type: "checkbox",
                                checked: form.read().in_rinc,
                                onchange: move |evt| form.write().in_rinc = evt.checked(),
                            }
                            "Indexed in RINC"
                        }
                    }
                    div { class: "flex justify-between items-center mt-2",
                        h2 { class: "text-lg font-semibold", "Authors" }
                        span { class: "text-sm", "Total contribution: {total}%" }
                    }
                    for author in authors {
                        div { key: "{author.key}", class: "flex gap-2 items-center",
                            input {
                                class: "input input-bordered flex-1",
                                placeholder: "Author name",
                                required: true,
                                value: "{author.name}",
                                oninput: move |evt| {
                                    if let Some(draft) = form.write().author_mut(author.key) {
                                        draft.name = evt.value();
                                    }
                                },
                            }
                            input {
                                class: "input input-bordered w-28",
                                r#type: "number",
                                min: "0",
                                max: "100",
                                step: "0.1",
                                value: "{author.contribution}",
                                oninput: move |evt| {
                                    let contribution = evt.value().parse().unwrap_or(0.0);
                                    if let Some(draft) = form.write().author_mut(author.key) {
                                        draft.contribution = contribution;
                                    }
                                },
                            }
                            label { class: "flex gap-1 items-center text-sm",
                                input {
                                    class: "checkbox checkbox-sm",
                                    r#type: "checkbox",
                                    checked: author.applied_for_award,
                                    onchange: move |evt| {
                                        if let Some(draft) = form.write().author_mut(author.key) {
                                            draft.applied_for_award = evt.checked();
                                        }
                                    },
                                }
                                "Award"
                            }
                            button {
                                class: "btn btn-ghost btn-sm",
                                r#type: "button",
                                disabled: !can_remove,
                                onclick: move |_| form.write().remove_author(author.key),
                                Icon { width: 14, height: 14, icon: FaTrash }
                            }
                        }
                    }
                    button {
                        class: "btn btn-outline btn-sm w-fit flex gap-2",
                        r#type: "button",
                        onclick: move |_| form.write().add_author(),
                        Icon { width: 12, height: 12, icon: FaPlus }
                        "Add author"
                    }
                    div { class: "card-actions justify-end",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: status.read().submitting,
                            "Save article"
                        }
                    }
                }
            }
        }
    )
}
