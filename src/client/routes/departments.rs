use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPenToSquare, FaPlus, FaTrash, FaUserPlus};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{Alert, ConfirmDialog, Modal, Page},
        router::Route,
        store::departments::{
            save_department, DepartmentEditor, DELETE_FAILED, EMPLOYEE_PREVIEW, LOAD_FAILED,
            SAVE_FAILED,
        },
        store::Remote,
        util::use_api,
    },
    model::{department::Department, user::User},
};

#[component]
pub fn Departments() -> Element {
    let api = use_api();
    let mut departments = use_signal(Remote::<Vec<Department>>::default);
    let mut users = use_signal(Vec::<User>::new);
    let mut editor = use_signal(DepartmentEditor::default);
    let mut error = use_signal(|| None::<String>);

    let reload = use_callback(move |_: ()| {
        let ticket = departments.write().begin_fetch();
        let client = api.client();

        spawn(async move {
            match client.list_departments().await {
                Ok(loaded) => {
                    departments.write().apply(ticket, loaded);
                }
                Err(err) => {
                    tracing::error!("Failed to load departments: {}", err);
                    departments
                        .write()
                        .apply_failure(ticket, err.user_message(LOAD_FAILED));
                }
            }
        });
    });

    use_effect(move || {
        reload.call(());

        let client = api.client();
        spawn(async move {
            // The manager selector stays empty when users cannot be listed
            match client.list_users().await {
                Ok(loaded) => users.set(loaded),
                Err(err) => tracing::warn!("Failed to load users: {}", err),
            }
        });
    });

    let on_save = move |evt: FormEvent| {
        evt.prevent_default();

        let submission = match editor.write().begin_save() {
            Ok(Some(submission)) => submission,
            Ok(None) | Err(_) => return,
        };
        let client = api.client();

        spawn(async move {
            match save_department(&client, &submission).await {
                Ok(saved) => {
                    tracing::info!("Saved department {}", saved.id);
                    editor.write().close();
                    reload.call(());
                }
                Err(err) => {
                    tracing::error!("Failed to save department: {}", err);
                    editor.write().status.fail(err.user_message(SAVE_FAILED));
                }
            }
        });
    };

    let on_confirm_delete = move |_: ()| {
        let Some(id) = editor.write().confirm_delete() else {
            return;
        };
        let client = api.client();

        spawn(async move {
            match client.delete_department(id).await {
                Ok(()) => {
                    tracing::info!("Deleted department {}", id);
                    reload.call(());
                }
                Err(err) => {
                    tracing::error!("Failed to delete department {}: {}", id, err);
                    error.set(Some(err.user_message(DELETE_FAILED)));
                }
            }
        });
    };

    let state = departments.read();
    let current_editor = editor.read().clone();

    rsx!(
        Title { "Departments | Scientific Works Registry" }
        Page {
            div { class: "flex justify-between items-center mb-4",
                h1 { class: "text-2xl font-bold", "Departments" }
                div { class: "flex gap-2",
                    Link { to: Route::AddEmployee {}, class: "btn btn-outline flex gap-2",
                        Icon { width: 14, height: 14, icon: FaUserPlus }
                        "Add employee"
                    }
                    button {
                        class: "btn btn-primary flex gap-2",
                        onclick: move |_| editor.write().open_create(),
                        Icon { width: 14, height: 14, icon: FaPlus }
                        "Create department"
                    }
                }
            }
            if let Some(message) = error() {
                Alert { message, on_close: move |_| error.set(None) }
            }
            if let Some(message) = state.error.clone() {
                Alert {
                    message,
                    on_close: move |_| departments.write().dismiss_error(),
                }
                button {
                    class: "btn btn-outline btn-sm mb-4",
                    onclick: move |_| reload.call(()),
                    "Retry"
                }
            }
            if let Some(list) = state.value.clone() {
                if list.is_empty() {
                    p { class: "text-center opacity-70 p-8", "No departments yet" }
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                    for department in list {
                        DepartmentCard {
                            key: "{department.id}",
                            department,
                            on_edit: move |department: Department| editor.write().open_edit(&department),
                            on_delete: move |id| editor.write().request_delete(id),
                        }
                    }
                }
            } else if state.loading {
                div { class: "flex justify-center p-8",
                    span { class: "loading loading-spinner loading-lg" }
                }
            }
        }
        if current_editor.is_open() {
            Modal {
                title: current_editor.title().to_string(),
                on_close: move |_| editor.write().close(),
                form { class: "flex flex-col gap-3", onsubmit: on_save,
                    if let Some(message) = current_editor.status.error.clone() {
                        Alert {
                            message,
                            on_close: move |_| editor.write().status.dismiss_error(),
                        }
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "Department name",
                        required: true,
                        value: "{current_editor.name}",
                        oninput: move |evt| editor.write().name = evt.value(),
                    }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| editor.write().set_manager(&evt.value()),
                        option { value: "", selected: current_editor.manager_id.is_none(), "No manager" }
                        for user in users.read().iter() {
                            option {
                                key: "{user.id}",
                                value: "{user.id}",
                                selected: current_editor.manager_id == Some(user.id),
                                "{user.option_label()}"
                            }
                        }
                    }
                    div { class: "modal-action",
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| editor.write().close(),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: current_editor.status.submitting,
                            "Save"
                        }
                    }
                }
            }
        }
        if current_editor.pending_delete.is_some() {
            ConfirmDialog {
                title: "Delete department".to_string(),
                message: "Are you sure you want to delete this department?".to_string(),
                confirm_label: "Delete".to_string(),
                on_confirm: on_confirm_delete,
                on_cancel: move |_| editor.write().cancel_delete(),
            }
        }
    )
}

#[component]
fn DepartmentCard(
    department: Department,
    on_edit: EventHandler<Department>,
    on_delete: EventHandler<i32>,
) -> Element {
    let (preview, hidden) = department.preview(EMPLOYEE_PREVIEW);
    let id = department.id;
    let editing = department.clone();

    rsx!(
        div { class: "card shadow-sm bg-base-100",
            div { class: "card-body",
                h2 { class: "card-title", "{department.name}" }
                if let Some(manager_id) = department.manager_id {
                    p { class: "text-sm opacity-70", "Manager ID: {manager_id}" }
                } else {
                    p { class: "text-sm opacity-70", "No manager assigned" }
                }
                if preview.is_empty() {
                    p { class: "text-sm", "No employees" }
                } else {
                    ul { class: "text-sm list-disc pl-4",
                        for employee in preview {
                            li { key: "{employee.id}", "{employee.fio}" }
                        }
                    }
                    if hidden > 0 {
                        p { class: "text-sm opacity-70", "and {hidden} more" }
                    }
                }
                div { class: "card-actions justify-end",
                    Link { to: Route::DepartmentDetail { id }, class: "btn btn-ghost btn-sm", "Details" }
                    button {
                        class: "btn btn-outline btn-sm",
                        aria_label: "Edit",
                        onclick: move |_| on_edit.call(editing.clone()),
                        Icon { width: 14, height: 14, icon: FaPenToSquare }
                    }
                    button {
                        class: "btn btn-error btn-outline btn-sm",
                        aria_label: "Delete",
                        onclick: move |_| on_delete.call(id),
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                }
            }
        }
    )
}
