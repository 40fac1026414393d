use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{Alert, AlertKind, Page},
    router::Route,
    store::{
        login::{finish_sign_in, sign_in, LoginForm},
        Flash, FormStatus, Session,
    },
    util::use_api,
};

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut session = use_context::<Signal<Session>>();
    let mut form = use_signal(LoginForm::default);
    let mut status = use_signal(FormStatus::default);
    let mut flash = use_context::<Signal<Flash>>();

    use_effect(move || flash.write().show_on(&mut status.write()));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !status.write().begin() {
            return;
        }
        let client = api.client();
        let submitted = form.peek().clone();

        spawn(async move {
            let result = sign_in(&client, &submitted).await;

            if finish_sign_in(result, &mut status.write(), &mut session.write()) {
                navigator().push(Route::Home {});
            }
        });
    };

    rsx!(
        Title { "Login | Scientific Works Registry" }
        Page { class: "flex justify-center",
            div { class: "card shadow-sm bg-base-100 w-full max-w-md mx-auto",
                form { class: "card-body gap-3", onsubmit: on_submit,
                    h1 { class: "card-title text-2xl", "Sign in" }
                    if let Some(error) = status.read().error.clone() {
                        Alert {
                            message: error,
                            on_close: move |_| status.write().dismiss_error(),
                        }
                    }
                    if let Some(success) = status.read().success.clone() {
                        Alert {
                            message: success,
                            kind: AlertKind::Success,
                            on_close: move |_| status.write().dismiss_success(),
                        }
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "Login",
                        required: true,
                        value: "{form.read().login}",
                        oninput: move |evt| form.write().login = evt.value(),
                    }
                    input {
                        class: "input input-bordered",
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: "{form.read().password}",
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: status.read().submitting,
                        if status.read().submitting { "Signing in..." } else { "Sign in" }
                    }
                    p { class: "text-sm text-center",
                        "No account? "
                        Link { to: Route::Register {}, class: "link", "Register" }
                    }
                }
            }
        }
    )
}
