//! Privileged account creation pages.

use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{Alert, AlertKind, Page},
        error::Error,
        store::{
            account_form::{AccountForm, AccountKindText},
            FormStatus,
        },
        util::use_api,
    },
    model::user::AccountKind,
};

/// Administrators create department managers.
#[component]
pub fn Admin() -> Element {
    rsx!(AccountCreate { kind: AccountKind::Manager })
}

/// Department managers create regular users.
#[component]
pub fn Manager() -> Element {
    rsx!(AccountCreate { kind: AccountKind::User })
}

#[component]
fn AccountCreate(kind: AccountKind) -> Element {
    let api = use_api();
    let mut form = use_signal(AccountForm::default);
    let mut status = use_signal(FormStatus::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !status.write().begin() {
            return;
        }

        let user = match form.peek().validate() {
            Ok(user) => user,
            Err(err) => {
                status.write().fail(err.to_string());
                return;
            }
        };
        let client = api.client();

        spawn(async move {
            match client.create_account(kind, &user).await {
                Ok(created) => {
                    tracing::info!("Created {} account {}", created.role, created.login);
                    form.write().clear();
                    status.write().succeed(kind.created_message());
                }
                Err(err) => {
                    tracing::error!("Failed to create account: {}", err);
                    status
                        .write()
                        .fail(Error::from(err).user_message(kind.failed_message()));
                }
            }
        });
    };

    rsx!(
        Title { "{kind.page_title()} | Scientific Works Registry" }
        Page {
            div { class: "card shadow-sm bg-base-100 max-w-xl mx-auto",
                form { class: "card-body gap-3", onsubmit: on_submit,
                    h1 { class: "card-title text-2xl", "{kind.page_title()}" }
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
                    input {
                        class: "input input-bordered",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{form.read().email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "Full name",
                        value: "{form.read().full_name}",
                        oninput: move |evt| form.write().full_name = evt.value(),
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "Department",
                        value: "{form.read().department}",
                        oninput: move |evt| form.write().department = evt.value(),
                    }
                    div { class: "card-actions justify-end",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: status.read().submitting,
                            "Create"
                        }
                    }
                }
            }
        }
    )
}
