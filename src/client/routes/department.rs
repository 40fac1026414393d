use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowLeft;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{Alert, Page},
        router::Route,
        store::Remote,
        util::use_api,
    },
    model::department::Department,
};

static LOAD_FAILED: &str = "Failed to load the department";

#[component]
pub fn DepartmentDetail(id: i32) -> Element {
    let api = use_api();
    let mut department = use_signal(Remote::<Department>::default);

    let load = use_callback(move |id: i32| {
        let ticket = department.write().begin_fetch();
        let client = api.client();

        spawn(async move {
            match client.get_department(id).await {
                Ok(loaded) => {
                    department.write().apply(ticket, loaded);
                }
                Err(err) => {
                    tracing::error!("Failed to load department {}: {}", id, err);
                    department
                        .write()
                        .apply_failure(ticket, err.user_message(LOAD_FAILED));
                }
            }
        });
    });

    use_effect(use_reactive((&id,), move |(id,)| load.call(id)));

    let current = department.read();

    rsx!(
        Title { "Department {id} | Scientific Works Registry" }
        Page {
            Link { to: Route::Departments {}, class: "btn btn-ghost btn-sm mb-4 flex gap-2 w-fit",
                Icon { width: 14, height: 14, icon: FaArrowLeft }
                "Back to departments"
            }
            if let Some(error) = current.error.clone() {
                Alert {
                    message: error,
                    on_close: move |_| department.write().dismiss_error(),
                }
                button {
                    class: "btn btn-outline btn-sm mb-4",
                    onclick: move |_| load.call(id),
                    "Retry"
                }
            }
            if let Some(loaded) = current.value.clone() {
                div { class: "card shadow-sm bg-base-100",
                    div { class: "card-body",
                        h1 { class: "card-title text-2xl", "{loaded.name}" }
                        if let Some(manager_id) = loaded.manager_id {
                            p { class: "text-sm opacity-70", "Manager ID: {manager_id}" }
                        }
                        h2 { class: "font-semibold mt-4", "Employees ({loaded.employees.len()})" }
                        if loaded.employees.is_empty() {
                            p { class: "text-sm", "No employees" }
                        }
                        ul { class: "list-disc pl-4",
                            for employee in loaded.employees.iter() {
                                li { key: "{employee.id}", "{employee.fio}" }
                            }
                        }
                    }
                }
            } else if current.loading {
                div { class: "flex justify-center p-8",
                    span { class: "loading loading-spinner loading-lg" }
                }
            }
        }
    )
}
