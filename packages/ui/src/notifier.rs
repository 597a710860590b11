//! Notification context: the injected toast/alert capability for the app.

use dioxus::prelude::*;
use taskflow::{AlertId, NotificationWidgetFactory, Notifications, Severity, ToastId};

use crate::timer::now_millis;

/// Copyable handle to the page's notification state.
///
/// Provided by [`NotificationProvider`]; grab it with [`use_notifier`].
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    state: Signal<Notifications>,
}

impl Notifier {
    /// Shows `message` as a toast.
    pub fn toast(&mut self, message: impl AsRef<str>, severity: Severity) -> ToastId {
        self.present(message.as_ref(), severity)
    }

    /// Shows a toast from a severity tag such as `"success"`.
    /// Unknown tags fall back to `info`.
    pub fn present_tagged(&mut self, message: &str, tag: &str) -> ToastId {
        self.present(message, Severity::from_tag_or_default(tag))
    }

    /// Queues a flash alert for the next alert area that mounts.
    pub fn flash(&mut self, severity: Severity, message: impl Into<String>) -> AlertId {
        self.state.write().push_alert(severity, message)
    }

    /// Read access for rendering.
    pub fn state(&self) -> Signal<Notifications> {
        self.state
    }
}

impl NotificationWidgetFactory for Notifier {
    fn present(&mut self, message: &str, severity: Severity) -> ToastId {
        self.state.write().present(message, severity)
    }

    fn hide_toast(&mut self, id: ToastId) -> bool {
        self.state.write().hide_toast(id)
    }

    fn remove_toast(&mut self, id: ToastId) -> bool {
        self.state.write().remove_toast(id)
    }

    fn close_alert(&mut self, id: AlertId) -> bool {
        self.state.write().close_alert(id)
    }
}

/// Get the notification handle provided higher up the tree.
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

/// Provider component that owns the notification state.
/// Wrap your app with this component to enable alerts and toasts.
///
/// `flash` and `pinned` seed the alert board with the alerts the first page
/// shows; pinned alerts are never auto-dismissed.
#[component]
pub fn NotificationProvider(
    #[props(default)] flash: Vec<(Severity, String)>,
    #[props(default)] pinned: Vec<(Severity, String)>,
    children: Element,
) -> Element {
    let state = use_signal(move || {
        let mut notifications = Notifications::new(now_millis);
        for (severity, message) in pinned {
            notifications.alerts_mut().push_permanent(severity, message);
        }
        for (severity, message) in flash {
            notifications.push_alert(severity, message);
        }
        notifications
    });
    use_context_provider(|| Notifier { state });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dioxus::dioxus_core::VirtualDom;
    use taskflow::ToastPhase;

    use super::*;

    thread_local! {
        static CAPTURED: Cell<Option<Notifier>> = const { Cell::new(None) };
    }

    #[component]
    fn Capture() -> Element {
        let notifier = use_notifier();
        CAPTURED.with(|cell| cell.set(Some(notifier)));
        rsx! {}
    }

    fn app() -> Element {
        rsx! {
            NotificationProvider {
                Capture {}
            }
        }
    }

    #[test]
    fn test_present_tagged_through_notifier() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let mut notifier = CAPTURED.with(Cell::get).expect("provider mounted");

        dom.in_runtime(|| {
            assert!(!notifier.state().peek().container_created());

            let unknown = notifier.present_tagged("Salvo", "loud");
            let success = notifier.present_tagged("Tarefa concluída", " Success ");

            let state = notifier.state();
            let state = state.peek();
            assert!(state.container_created());
            assert_eq!(state.toasts().len(), 2);

            let unknown = state.toast(unknown).unwrap();
            assert_eq!(unknown.severity, Severity::Info);
            assert_eq!(unknown.message, "Salvo");
            assert_eq!(unknown.phase, ToastPhase::Shown);
            assert_eq!(state.toast(success).map(|t| t.severity), Some(Severity::Success));
        });
    }

    #[test]
    fn test_seeded_alerts() {
        fn seeded() -> Element {
            rsx! {
                NotificationProvider {
                    pinned: vec![(Severity::Info, "Plantão".to_string())],
                    flash: vec![(Severity::Success, "Bem-vindo".to_string())],
                    Capture {}
                }
            }
        }

        let mut dom = VirtualDom::new(seeded);
        dom.rebuild_in_place();
        let notifier = CAPTURED.with(Cell::get).expect("provider mounted");

        dom.in_runtime(|| {
            let state = notifier.state();
            let state = state.peek();
            let alerts = state.alerts().alerts();
            assert_eq!(alerts.len(), 2);
            assert!(alerts[0].permanent);
            assert_eq!(state.alerts().auto_dismissable(), vec![alerts[1].id]);
            assert!(!state.container_created());
        });
    }
}
