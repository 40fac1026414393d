use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::Navbar,
    router::Route,
    store::{session::resolve_session, Session},
    util::use_api,
};

/// Application frame: header, role dependent navigation and the current page.
///
/// Re-resolves the signed in user on every route change.
#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();
    let mut session = use_context::<Signal<Session>>();
    let api = use_api();

    use_effect(use_reactive((&route,), move |(route,)| {
        let token = session.peek().token().map(str::to_string);
        let client = api.client();
        tracing::debug!("Resolving session for {}", route);

        spawn(async move {
            let resolution = resolve_session(token.as_deref(), &client).await;
            session.write().apply(token.as_deref(), resolution);
        });
    }));

    let logout = move |_: MouseEvent| {
        session.write().logout();
        navigator().push(Route::Login {});
    };

    let role = session.read().role();
    let user = session.read().user().cloned();

    rsx!(
        header {
            class: "navbar bg-base-200 fixed top-0 z-10",
            div { class: "navbar-start",
                Link { to: Route::Home {}, class: "btn btn-ghost text-xl", "Scientific Works Registry" }
            }
            div { class: "navbar-end gap-2",
                if let Some(user) = user {
                    span { class: "font-semibold", "{user.name}" }
                    span { class: "badge badge-outline", "{user.role}" }
                    button {
                        class: "btn btn-outline btn-sm flex gap-2",
                        onclick: logout,
                        Icon { width: 14, height: 14, icon: FaRightFromBracket }
                        "Logout"
                    }
                } else if !session.read().is_authenticated() {
                    Link { to: Route::Login {}, class: "btn btn-primary btn-sm", "Login" }
                    Link { to: Route::Register {}, class: "btn btn-outline btn-sm", "Register" }
                }
            }
        }
        div { class: "flex",
            Navbar { role }
            Outlet::<Route> {}
        }
    )
}
