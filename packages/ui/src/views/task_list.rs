use dioxus::prelude::*;
use taskflow::{Severity, Task, TaskId, TaskStatus};

use crate::{today, use_confirm, use_notifier, use_tasks, FlashAlerts, RevealCard};

/// Shared task list view.
///
/// Platform packages provide the navigation callbacks for the "new task" and
/// "edit" buttons.
#[component]
pub fn TaskListView(on_new_task: EventHandler<()>, on_edit_task: EventHandler<TaskId>) -> Element {
    let tasks = use_tasks();
    let mut show_done = use_signal(|| true);

    let visible: Vec<Task> = tasks
        .read()
        .list(show_done())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div {
            class: "container py-4",
            FlashAlerts {}

            div {
                class: "d-flex justify-content-between align-items-center mb-3",
                h2 { class: "h4 m-0", "Tarefas" }
                div {
                    class: "d-flex gap-3 align-items-center",
                    label {
                        class: "form-check-label",
                        input {
                            class: "form-check-input me-1",
                            r#type: "checkbox",
                            checked: show_done(),
                            onchange: move |evt: FormEvent| show_done.set(evt.checked()),
                        }
                        "Mostrar concluídas"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_new_task.call(()),
                        "Nova tarefa"
                    }
                }
            }

            if visible.is_empty() {
                p { class: "text-muted", "Nenhuma tarefa cadastrada." }
            }

            div {
                class: "row g-3",
                for (index, task) in visible.into_iter().enumerate() {
                    div {
                        key: "{task.id}",
                        class: "col-md-6 col-lg-4",
                        TaskCard { index, task: task.clone(), on_edit: on_edit_task }
                    }
                }
            }
        }
    }
}

#[component]
fn TaskCard(index: usize, task: Task, on_edit: EventHandler<TaskId>) -> Element {
    let mut tasks = use_tasks();
    let mut notifier = use_notifier();
    let confirm = use_confirm();
    let id: TaskId = task.id;
    let done = task.status == TaskStatus::Done;
    let status = task.status.label();
    let card_class = if done { "border-success" } else { "" }.to_string();

    let complete = {
        let confirm = confirm.clone();
        move |_| {
            if !confirm.ask(Some("Marcar esta tarefa como concluída?")) {
                return;
            }
            let result = tasks.write().complete(id, &today()).map(|t| t.title.clone());
            match result {
                Ok(title) => {
                    notifier.toast(format!("Tarefa \"{title}\" concluída."), Severity::Success);
                }
                Err(e) => {
                    tracing::error!("complete {id}: {e}");
                    notifier.toast(e.to_string(), Severity::Danger);
                }
            }
        }
    };

    let delete = move |_| {
        if !confirm.ask(None) {
            return;
        }
        let result = tasks.write().delete(id);
        match result {
            Ok(task) => {
                notifier.toast(format!("Tarefa \"{}\" excluída.", task.title), Severity::Warning);
            }
            Err(e) => {
                tracing::error!("delete {id}: {e}");
                notifier.toast(e.to_string(), Severity::Danger);
            }
        }
    };

    rsx! {
        RevealCard {
            index,
            class: card_class,
            div {
                class: "card-body",
                h5 { class: "card-title", "{task.title}" }
                if !task.description.is_empty() {
                    p { class: "card-text", "{task.description}" }
                }
                ul {
                    class: "list-unstyled small text-muted mb-3",
                    if !task.assignee.is_empty() {
                        li { "Responsável: {task.assignee}" }
                    }
                    li { "Prazo: {task.deadline}" }
                    li { "Criada em: {task.created_on}" }
                    if let Some(ref completed_on) = task.completed_on {
                        li { "Concluída em: {completed_on}" }
                    }
                }
                span {
                    class: if done { "badge bg-success" } else { "badge bg-secondary" },
                    "{status}"
                }
            }
            div {
                class: "card-footer d-flex gap-2",
                if !done {
                    button {
                        class: "btn btn-sm btn-outline-success",
                        onclick: complete,
                        "Concluir"
                    }
                    button {
                        class: "btn btn-sm btn-outline-primary",
                        onclick: move |_| on_edit.call(id),
                        "Editar"
                    }
                }
                button {
                    class: "btn btn-sm btn-outline-danger",
                    onclick: delete,
                    "Excluir"
                }
            }
        }
    }
}
