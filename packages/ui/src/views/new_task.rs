use dioxus::prelude::*;
use taskflow::{Severity, TaskId};

use super::task_fields::TaskFields;
use crate::{today, use_notifier, use_tasks};

/// Form for creating a task.
///
/// On success a flash alert is queued for the next page and `on_created` is
/// called with the new task's id. Validation errors are shown as a toast.
#[component]
pub fn NewTaskView(on_created: EventHandler<TaskId>, on_cancel: EventHandler<()>) -> Element {
    let mut tasks = use_tasks();
    let mut notifier = use_notifier();

    let title = use_signal(String::new);
    let description = use_signal(String::new);
    let assignee = use_signal(String::new);
    let deadline = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = tasks
            .write()
            .create(&title(), &description(), &assignee(), &deadline(), &today())
            .map(|task| (task.id, task.title.clone()));
        match result {
            Ok((id, created)) => {
                notifier.flash(
                    Severity::Success,
                    format!("Tarefa \"{created}\" cadastrada com sucesso!"),
                );
                on_created.call(id);
            }
            Err(e) => {
                tracing::warn!("new task rejected: {e}");
                notifier.toast(e.to_string(), Severity::Danger);
            }
        }
    };

    rsx! {
        div {
            class: "container py-4",
            h2 { class: "h4 mb-4", "Nova tarefa" }

            form {
                onsubmit: handle_submit,

                TaskFields { title, description, assignee, deadline }

                div {
                    class: "d-flex gap-2",
                    button { class: "btn btn-primary", r#type: "submit", "Salvar" }
                    button {
                        class: "btn btn-outline-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                }
            }
        }
    }
}
