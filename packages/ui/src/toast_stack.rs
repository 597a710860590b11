use dioxus::prelude::*;
use taskflow::{Severity, Toast, ToastPhase};

use crate::dismissal::hide_toast_after;
use crate::icons::{
    FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaTriangleExclamation, FaXmark,
};
use crate::{use_config, use_notifier, Icon, NOTIFICATIONS_CSS};

/// Fixed-position container for toasts, bottom-right.
///
/// Renders nothing until the first toast has been presented; after that the
/// container stays, even when empty.
#[component]
pub fn ToastStack() -> Element {
    let notifier = use_notifier();
    let config = use_config();
    let state = notifier.state();

    if !state.read().container_created() {
        return rsx! {};
    }

    let toasts = state.read().toasts().to_vec();

    rsx! {
        document::Stylesheet { href: NOTIFICATIONS_CSS }

        div {
            id: "{config.toasts.container_id}",
            class: "position-fixed bottom-0 end-0 p-3",
            style: "z-index: 11",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let notifier = use_notifier();
    let config = use_config();
    let delay = config.toast_hide_delay();
    let transition = config.toast_hide_transition();
    let id = toast.id;
    let element_id = id.element_id();

    // Auto-hide; dropped if the toast goes away first.
    use_hook(move || {
        spawn(async move {
            let mut notifier = notifier;
            hide_toast_after(&mut notifier, id, delay, transition).await;
        })
    });

    let close = move |_| {
        spawn(async move {
            let mut notifier = notifier;
            hide_toast_after(&mut notifier, id, std::time::Duration::ZERO, transition).await;
        });
    };

    let shown = if toast.phase == ToastPhase::Shown { " show" } else { "" };
    let class = format!(
        "toast align-items-center text-white {} border-0 fade{shown}",
        toast.severity.background_class()
    );

    rsx! {
        div {
            id: "{element_id}",
            class: "{class}",
            role: "alert",
            aria_live: "assertive",
            aria_atomic: "true",
            div {
                class: "d-flex",
                div {
                    class: "toast-body",
                    SeverityIcon { severity: toast.severity }
                    " {toast.message}"
                }
                button {
                    r#type: "button",
                    class: "toast-close me-2 m-auto",
                    aria_label: "Fechar",
                    onclick: close,
                    Icon { icon: FaXmark, width: 12, height: 12 }
                }
            }
        }
    }
}

#[component]
fn SeverityIcon(severity: Severity) -> Element {
    match severity {
        Severity::Success => rsx! { Icon { icon: FaCircleCheck, width: 14, height: 14 } },
        Severity::Danger => rsx! { Icon { icon: FaCircleExclamation, width: 14, height: 14 } },
        Severity::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 14, height: 14 } },
        _ => rsx! { Icon { icon: FaCircleInfo, width: 14, height: 14 } },
    }
}
