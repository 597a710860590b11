//! Timed teardown of alerts and toasts.
//!
//! These futures are spawned in the scope of the widget they tear down, so
//! unmounting the widget drops the pending timer with it.

use std::time::Duration;

use taskflow::{AlertId, NotificationWidgetFactory, ToastId};

use crate::timer::sleep;

/// Closes `id` after `delay`. Returns `false` if the alert was already gone.
pub async fn close_alert_after<F: NotificationWidgetFactory>(
    factory: &mut F,
    id: AlertId,
    delay: Duration,
) -> bool {
    sleep(delay).await;
    let closed = factory.close_alert(id);
    if closed {
        tracing::debug!(?id, "alert auto-dismissed");
    }
    closed
}

/// Hides `id` after `delay`, then removes it once `transition` has elapsed.
///
/// If the toast is already hiding or gone, whoever started that owns the
/// removal and this returns `false`.
pub async fn hide_toast_after<F: NotificationWidgetFactory>(
    factory: &mut F,
    id: ToastId,
    delay: Duration,
    transition: Duration,
) -> bool {
    sleep(delay).await;
    if !factory.hide_toast(id) {
        return false;
    }
    sleep(transition).await;
    factory.remove_toast(id)
}

#[cfg(test)]
mod tests {
    use taskflow::{Notifications, Severity, ToastPhase};

    use super::*;

    fn clock() -> u64 {
        1_000
    }

    #[tokio::test(start_paused = true)]
    async fn test_alert_closed_after_delay() {
        let mut n = Notifications::new(clock);
        let id = n.push_alert(Severity::Success, "Login realizado com sucesso!");

        let start = tokio::time::Instant::now();
        assert!(close_alert_after(&mut n, id, Duration::from_secs(5)).await);
        assert_eq!(start.elapsed(), Duration::from_secs(5));
        assert!(n.alerts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_dismissal_of_closed_alert_is_noop() {
        let mut n = Notifications::new(clock);
        let id = n.push_alert(Severity::Info, "Logout realizado com sucesso");
        let other = n.push_alert(Severity::Info, "Outro aviso");
        n.close_alert(id);

        assert!(!close_alert_after(&mut n, id, Duration::from_secs(5)).await);
        assert_eq!(n.alerts().len(), 1);
        assert!(n.alerts().get(other).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_hides_then_is_removed() {
        let mut n = Notifications::new(clock);
        let id = n.present("Tarefa concluída", Severity::Success);

        let start = tokio::time::Instant::now();
        let removed = hide_toast_after(
            &mut n,
            id,
            Duration::from_millis(5000),
            Duration::from_millis(150),
        )
        .await;

        assert!(removed);
        assert_eq!(start.elapsed(), Duration::from_millis(5150));
        assert!(n.toasts().is_empty());
        assert!(n.container_created());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_already_hiding_is_left_alone() {
        let mut n = Notifications::new(clock);
        let id = n.present("Salvo", Severity::Info);
        n.hide_toast(id);

        let removed = hide_toast_after(&mut n, id, Duration::ZERO, Duration::from_millis(150)).await;
        assert!(!removed);
        assert_eq!(n.toast(id).map(|t| t.phase), Some(ToastPhase::Hiding));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_timer_never_fires() {
        let mut n = Notifications::new(clock);
        let id = n.push_alert(Severity::Warning, "Sessão expirando");

        let timer = close_alert_after(&mut n, id, Duration::from_secs(5));
        let outcome = tokio::time::timeout(Duration::from_secs(1), timer).await;

        assert!(outcome.is_err());
        assert_eq!(n.alerts().len(), 1);
    }
}
