use dioxus::prelude::*;
use taskflow::date_mask::is_complete;

use crate::TextField;

/// The four inputs shared by the new-task and edit-task forms.
#[component]
pub fn TaskFields(
    title: Signal<String>,
    description: Signal<String>,
    assignee: Signal<String>,
    deadline: Signal<String>,
) -> Element {
    let mut title = title;
    let mut description = description;
    let mut assignee = assignee;
    let mut deadline = deadline;

    rsx! {
        div {
            class: "mb-3",
            label { class: "form-label", r#for: "titulo", "Título" }
            TextField {
                id: "titulo",
                name: "titulo",
                required: true,
                value: title(),
                oninput: move |v| title.set(v),
            }
        }

        div {
            class: "mb-3",
            label { class: "form-label", r#for: "descricao", "Descrição" }
            TextField {
                id: "descricao",
                name: "descricao",
                value: description(),
                oninput: move |v| description.set(v),
            }
        }

        div {
            class: "mb-3",
            label { class: "form-label", r#for: "responsavel", "Responsável" }
            TextField {
                id: "responsavel",
                name: "responsavel",
                value: assignee(),
                oninput: move |v| assignee.set(v),
            }
        }

        div {
            class: "mb-3",
            label { class: "form-label", r#for: "prazo", "Prazo" }
            TextField {
                id: "prazo",
                name: "prazo",
                required: true,
                value: deadline(),
                oninput: move |v| deadline.set(v),
            }
            if !deadline().is_empty() && !is_complete(&deadline()) {
                div { class: "form-text", "Use o formato dd/mm/aaaa." }
            }
        }
    }
}
