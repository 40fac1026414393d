use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{Alert, ArticleCard, Page, Pagination},
        store::article_list::{ArticleListState, LOAD_FAILED},
        util::use_api,
    },
    model::article::PageSize,
};

#[component]
pub fn Home() -> Element {
    let api = use_api();
    let mut state = use_signal(ArticleListState::default);

    // Fetch the page currently described by the applied query
    let load = use_callback(move |_: ()| {
        let (ticket, query) = {
            let mut state = state.write();
            (state.begin_fetch(), state.query.clone())
        };
        let client = api.client();

        spawn(async move {
            match client.list_articles(&query).await {
                Ok(page) => {
                    state.write().apply_page(ticket, page);
                }
                Err(err) => {
                    tracing::error!("Failed to load articles: {}", err);
                    state
                        .write()
                        .apply_failure(ticket, err.user_message(LOAD_FAILED));
                }
            }
        });
    });

    use_effect(move || load.call(()));

    let on_search = move |evt: FormEvent| {
        evt.prevent_default();
        state.write().submit_search();
        load.call(());
    };

    let on_page = move |page: u32| {
        if state.write().set_page(page) {
            load.call(());
        }
    };

    let on_per_page = move |evt: FormEvent| {
        if let Some(size) = evt.value().parse().ok().and_then(PageSize::from_value) {
            state.write().set_per_page(size);
            load.call(());
        }
    };

    let on_show_all = move |_: MouseEvent| {
        state.write().show_all();
        load.call(());
    };

    let current = state.read();

    rsx!(
        Title { "Articles | Scientific Works Registry" }
        Page {
            h1 { class: "text-2xl font-bold mb-4", "Scientific articles" }
            form {
                class: "grid grid-cols-1 md:grid-cols-4 gap-2 mb-4",
                onsubmit: on_search,
                input {
                    class: "input input-bordered",
                    placeholder: "Article ID",
                    value: "{current.draft.id}",
                    oninput: move |evt| state.write().draft.id = evt.value(),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Title",
                    value: "{current.draft.title}",
                    oninput: move |evt| state.write().draft.title = evt.value(),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Author",
                    value: "{current.draft.author}",
                    oninput: move |evt| state.write().draft.author = evt.value(),
                }
                div { class: "flex gap-2",
                    button {
                        class: "btn btn-primary flex gap-2",
                        r#type: "submit",
                        Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                        "Search"
                    }
                    if current.is_filtered() {
                        button {
                            class: "btn btn-outline",
                            r#type: "button",
                            onclick: on_show_all,
                            "Show all"
                        }
                    }
                }
            }
            div { class: "flex justify-between items-center mb-4",
                p { class: "text-sm opacity-70", "Found: {current.total}" }
                label { class: "flex gap-2 items-center text-sm",
                    "Per page"
                    select {
                        class: "select select-bordered select-sm",
                        onchange: on_per_page,
                        for size in PageSize::ALL {
                            option {
                                value: "{size.get()}",
                                selected: size == current.query.per_page,
                                "{size.get()}"
                            }
                        }
                    }
                }
            }
            if let Some(error) = current.error.clone() {
                Alert {
                    message: error,
                    on_close: move |_| state.write().dismiss_error(),
                }
                button {
                    class: "btn btn-outline btn-sm mb-4",
                    onclick: move |_| load.call(()),
                    "Retry"
                }
            }
            if current.loading && current.articles.is_empty() {
                div { class: "flex justify-center p-8",
                    span { class: "loading loading-spinner loading-lg" }
                }
            } else if current.articles.is_empty() {
                p { class: "text-center opacity-70 p-8", "No articles found" }
            } else {
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                    for article in current.articles.iter().cloned() {
                        ArticleCard { key: "{article.id}", article }
                    }
                }
            }
            Pagination {
                page: current.query.page,
                pages: current.pages,
                on_change: on_page,
            }
        }
    )
}
