use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{Alert, Page},
    router::Route,
    store::{
        register::{failure_message, register, RegisterForm, REGISTERED},
        Flash, FormStatus,
    },
    util::use_api,
};

#[component]
pub fn Register() -> Element {
    let api = use_api();
    let mut form = use_signal(RegisterForm::default);
    let mut status = use_signal(FormStatus::default);
    let mut flash = use_context::<Signal<Flash>>();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !status.write().begin() {
            return;
        }
        let client = api.client();
        let submitted = form.peek().clone();

        spawn(async move {
            let result = register(&client, &submitted).await;

            match result {
                Ok(user) => {
                    tracing::info!("Registered user {}", user.login);
                    status.write().finish();
                    flash.write().set(REGISTERED);
                    navigator().push(Route::Login {});
                }
                Err(err) => {
                    tracing::warn!("Registration failed: {}", err);
                    status.write().fail(failure_message(&err));
                }
            }
        });
    };

    rsx!(
        Title { "Register | Scientific Works Registry" }
        Page { class: "flex justify-center",
            div { class: "card shadow-sm bg-base-100 w-full max-w-md mx-auto",
                form { class: "card-body gap-3", onsubmit: on_submit,
                    h1 { class: "card-title text-2xl", "Create an account" }
                    if let Some(error) = status.read().error.clone() {
                        Alert {
                            message: error,
                            on_close: move |_| status.write().dismiss_error(),
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
                        r#type: "email",
                        placeholder: "Email",
                        value: "{form.read().email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                    input {
                        class: "input input-bordered",
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: "{form.read().password}",
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                    input {
                        class: "input input-bordered",
                        r#type: "password",
                        placeholder: "Confirm password",
                        required: true,
                        value: "{form.read().confirm_password}",
                        oninput: move |evt| form.write().confirm_password = evt.value(),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: status.read().submitting,
                        "Register"
                    }
                    p { class: "text-sm text-center",
                        "Already registered? "
                        Link { to: Route::Login {}, class: "link", "Sign in" }
                    }
                }
            }
        }
    )
}
