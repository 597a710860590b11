use dioxus::prelude::*;
use taskflow::{Alert, AlertId, NotificationWidgetFactory};

use crate::dismissal::close_alert_after;
use crate::icons::FaXmark;
use crate::{use_config, use_notifier, Icon, NOTIFICATIONS_CSS};

/// Flash alert area.
///
/// Alerts present when the area mounts are closed after the configured delay,
/// unless they are permanent. Alerts flashed later stay until closed by hand.
#[component]
pub fn FlashAlerts() -> Element {
    let notifier = use_notifier();
    let state = notifier.state();
    // Snapshot taken once, on mount.
    let scheduled: Vec<AlertId> = use_hook(|| state.peek().alerts().auto_dismissable());

    let alerts = state.read().alerts().alerts().to_vec();

    rsx! {
        document::Stylesheet { href: NOTIFICATIONS_CSS }

        div {
            class: "flash-alerts",
            for alert in alerts {
                AlertBanner {
                    key: "{alert.id}",
                    auto_dismiss: scheduled.contains(&alert.id),
                    alert: alert.clone(),
                }
            }
        }
    }
}

#[component]
fn AlertBanner(alert: Alert, auto_dismiss: bool) -> Element {
    let mut notifier = use_notifier();
    let delay = use_config().alert_dismiss_delay();
    let id = alert.id;

    // Owned by this banner: closing it by hand drops the timer.
    use_hook(move || {
        if auto_dismiss {
            spawn(async move {
                let mut notifier = notifier;
                close_alert_after(&mut notifier, id, delay).await;
            });
        }
    });

    let class = if alert.permanent {
        format!("alert {} alert-permanent alert-dismissible fade show", alert.severity.alert_class())
    } else {
        format!("alert {} alert-dismissible fade show", alert.severity.alert_class())
    };

    rsx! {
        div {
            class: "{class}",
            role: "alert",
            "{alert.message}"
            button {
                r#type: "button",
                class: "alert-close",
                aria_label: "Fechar",
                onclick: move |_| {
                    notifier.close_alert(id);
                },
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use taskflow::Severity;

    use super::*;
    use crate::{NotificationProvider, Notifier};

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
                pinned: vec![(Severity::Info, "Plantão noturno".to_string())],
                flash: vec![(Severity::Success, "Bem-vindo".to_string())],
                Capture {}
                FlashAlerts {}
            }
        }
    }

    fn alert_named(notifier: Notifier, message: &str) -> Option<AlertId> {
        let state = notifier.state();
        let state = state.peek();
        state
            .alerts()
            .alerts()
            .iter()
            .find(|alert| alert.message == message)
            .map(|alert| alert.id)
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_alerts_present_at_mount_are_dismissed() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let mut notifier = CAPTURED.with(Cell::get).expect("provider mounted");

        let late = dom.in_runtime(|| notifier.flash(Severity::Warning, "Chegou depois"));
        dom.render_immediate(&mut NoOpMutations);

        let (welcome, pinned) = dom.in_runtime(|| {
            (
                alert_named(notifier, "Bem-vindo").unwrap(),
                alert_named(notifier, "Plantão noturno").unwrap(),
            )
        });

        // Just before the delay nothing has closed yet
        let _ = tokio::time::timeout(Duration::from_millis(4_900), async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
            }
        })
        .await;
        dom.in_runtime(|| assert_eq!(notifier.state().peek().alerts().len(), 3));

        let _ = tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
            }
        })
        .await;

        dom.in_runtime(|| {
            let state = notifier.state();
            let state = state.peek();
            assert!(state.alerts().get(welcome).is_none());
            assert!(state.alerts().get(pinned).is_some());
            assert!(state.alerts().get(late).is_some());
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_by_hand_before_delay() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let mut notifier = CAPTURED.with(Cell::get).expect("provider mounted");

        let welcome = dom.in_runtime(|| alert_named(notifier, "Bem-vindo").unwrap());
        assert!(dom.in_runtime(|| notifier.close_alert(welcome)));
        dom.render_immediate(&mut NoOpMutations);

        let _ = tokio::time::timeout(Duration::from_secs(6), async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
            }
        })
        .await;

        dom.in_runtime(|| {
            let state = notifier.state();
            let state = state.peek();
            assert_eq!(state.alerts().len(), 1);
            assert!(state.alerts().alerts()[0].permanent);
        });
    }
}
