use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{Alert, Page},
        error::Error,
        router::Route,
        store::{
            employee_form::{EmployeeForm, CREATE_FAILED, DEPARTMENTS_FAILED},
            FormStatus,
        },
        util::use_api,
    },
    model::department::Department,
};

#[component]
pub fn AddEmployee() -> Element {
    let api = use_api();
    let mut form = use_signal(EmployeeForm::default);
    let mut status = use_signal(FormStatus::default);
    let mut departments = use_signal(Vec::<Department>::new);

    use_effect(move || {
        let client = api.client();

        spawn(async move {
            match client.list_departments().await {
                Ok(loaded) => departments.set(loaded),
                Err(err) => {
                    tracing::error!("Failed to load departments: {}", err);
                    status.write().fail(DEPARTMENTS_FAILED);
                }
            }
        });
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !status.write().begin() {
            return;
        }

        let employee = match form.peek().validate() {
            Ok(employee) => employee,
            Err(err) => {
                status.write().fail(err.to_string());
                return;
            }
        };
        let client = api.client();

        spawn(async move {
            match client.create_employee(&employee).await {
                Ok(created) => {
                    tracing::info!("Created employee {}", created.id);
                    status.write().finish();
                    navigator().push(Route::Departments {});
                }
                Err(err) => {
                    tracing::error!("Failed to create employee: {}", err);
                    status
                        .write()
                        .fail(Error::from(err).user_message(CREATE_FAILED));
                }
            }
        });
    };

    rsx!(
        Title { "Add employee | Scientific Works Registry" }
        Page {
            div { class: "card shadow-sm bg-base-100 max-w-2xl mx-auto",
                form { class: "card-body gap-3", onsubmit: on_submit,
                    h1 { class: "card-title text-2xl", "Add a new employee" }
                    if let Some(error) = status.read().error.clone() {
                        Alert {
                            message: error,
                            on_close: move |_| status.write().dismiss_error(),
                        }
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-2",
                        input {
                            class: "input input-bordered",
                            placeholder: "Last name",
                            required: true,
                            value: "{form.read().last_name}",
                            oninput: move |evt| form.write().last_name = evt.value(),
                        }
                        input {
                            class: "input input-bordered",
                            placeholder: "First name",
                            required: true,
                            value: "{form.read().first_name}",
                            oninput: move |evt| form.write().first_name = evt.value(),
                        }
                        input {
                            class: "input input-bordered",
                            placeholder: "Middle name",
                            value: "{form.read().middle_name}",
                            oninput: move |evt| form.write().middle_name = evt.value(),
                        }
                    }
                    fieldset { class: "flex flex-col gap-1",
                        legend { class: "font-semibold mb-1", "Departments" }
                        for department in departments.read().iter().cloned() {
                            label { key: "{department.id}", class: "flex gap-2 items-center",
                                input {
                                    class: "checkbox checkbox-sm",
                                    r#type: "checkbox",
                                    checked: form.read().is_selected(department.id),
                                    onchange: move |evt| {
                                        form.write().toggle_department(department.id, evt.checked())
                                    },
                                }
                                "{department.name}"
                            }
                        }
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "Position",
                        value: "{form.read().position}",
                        oninput: move |evt| form.write().position = evt.value(),
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-2",
                        input {
                            class: "input input-bordered",
                            r#type: "email",
                            placeholder: "Email",
                            value: "{form.read().email}",
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                        input {
                            class: "input input-bordered",
                            r#type: "tel",
                            placeholder: "Phone",
                            value: "{form.read().phone}",
                            oninput: move |evt| form.write().phone = evt.value(),
                        }
                    }
                    div { class: "card-actions justify-end",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: status.read().submitting,
                            "Save employee"
                        }
                    }
                }
            }
        }
    )
}
