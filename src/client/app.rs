use dioxus::document::Stylesheet;
use dioxus::prelude::*;

use crate::client::{
    api::ApiClient,
    config::Config,
    router::Route,
    store::{session::default_token_store, Flash, Session},
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root component.
///
/// Provides the API client, the session and the flash message to every page. The [`Config`] is expected in
/// the root context, put there by the launcher.
#[component]
pub fn App() -> Element {
    let config = try_consume_context::<Config>().unwrap_or_default();

    use_context_provider(|| Signal::new(ApiClient::new(&config)));
    use_context_provider(|| Signal::new(Session::restore(default_token_store())));
    use_context_provider(|| Signal::new(Flash::default()));

    rsx! {
        Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
