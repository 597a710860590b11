use dioxus::prelude::*;
use taskflow::{Severity, TaskId, TaskUpdate};

use super::task_fields::TaskFields;
use crate::{use_confirm, use_notifier, use_tasks};

/// Form for editing an existing task.
///
/// The fields start from the task as it was when the form opened. Saving asks
/// for confirmation, queues a flash alert and calls `on_saved`; validation
/// errors are shown as a toast and the task is left as it was.
#[component]
pub fn EditTaskView(id: TaskId, on_saved: EventHandler<TaskId>, on_cancel: EventHandler<()>) -> Element {
    let mut tasks = use_tasks();
    let mut notifier = use_notifier();
    let confirm = use_confirm();

    let original = use_hook(|| tasks.peek().get(id).cloned());
    let title = use_signal(|| original.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let description =
        use_signal(|| original.as_ref().map(|t| t.description.clone()).unwrap_or_default());
    let assignee = use_signal(|| original.as_ref().map(|t| t.assignee.clone()).unwrap_or_default());
    let deadline = use_signal(|| original.as_ref().map(|t| t.deadline.clone()).unwrap_or_default());

    if original.is_none() {
        return rsx! {
            div {
                class: "container py-4",
                p { class: "text-muted", "Tarefa {id} não encontrada." }
                button {
                    class: "btn btn-outline-secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Voltar"
                }
            }
        };
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !confirm.ask(Some("Salvar as alterações desta tarefa?")) {
            return;
        }
        let update = TaskUpdate {
            title: Some(title()),
            description: Some(description()),
            assignee: Some(assignee()),
            deadline: Some(deadline()),
        };
        let result = tasks.write().update(id, update).map(|task| task.title.clone());
        match result {
            Ok(saved) => {
                notifier.flash(
                    Severity::Success,
                    format!("Tarefa \"{saved}\" atualizada com sucesso!"),
                );
                on_saved.call(id);
            }
            Err(e) => {
                tracing::warn!("edit {id} rejected: {e}");
                notifier.toast(e.to_string(), Severity::Danger);
            }
        }
    };

    rsx! {
        div {
            class: "container py-4",
            h2 { class: "h4 mb-4", "Editar tarefa" }

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
