//! Notification state for one page: flash alerts and toasts.
//!
//! Alerts arrive with the page and are closed either by the user or by the
//! auto-dismiss timer. Toasts are created on demand through
//! [`NotificationWidgetFactory::present`], hide after a delay and are removed
//! once hidden. The widgets that render this state receive it as an injected
//! [`NotificationWidgetFactory`] rather than reaching for a global.

use std::fmt;

use crate::severity::Severity;

/// Capability to create and tear down notification widgets.
pub trait NotificationWidgetFactory {
    /// Shows a toast and returns its id. Creates the toast container on first use.
    fn present(&mut self, message: &str, severity: Severity) -> ToastId;

    /// Starts hiding a shown toast. Returns `false` if it is unknown or already hiding.
    fn hide_toast(&mut self, id: ToastId) -> bool;

    /// Removes a toast once it has hidden. Returns `false` if it is unknown.
    fn remove_toast(&mut self, id: ToastId) -> bool;

    /// Closes an alert. Returns `false` if it was already gone.
    fn close_alert(&mut self, id: AlertId) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(u64);

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alert-{}", self.0)
    }
}

/// A flash message banner.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: AlertId,
    pub severity: Severity,
    pub message: String,
    /// Permanent alerts are never auto-dismissed.
    pub permanent: bool,
}

/// Alerts currently on the page, in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertBoard {
    alerts: Vec<Alert>,
    next_id: u64,
}

impl AlertBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>) -> AlertId {
        self.insert(severity, message.into(), false)
    }

    pub fn push_permanent(&mut self, severity: Severity, message: impl Into<String>) -> AlertId {
        self.insert(severity, message.into(), true)
    }

    fn insert(&mut self, severity: Severity, message: String, permanent: bool) -> AlertId {
        let id = AlertId(self.next_id);
        self.next_id += 1;
        self.alerts.push(Alert {
            id,
            severity,
            message,
            permanent,
        });
        id
    }

    pub fn close(&mut self, id: AlertId) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.id != id);
        self.alerts.len() < before
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn get(&self, id: AlertId) -> Option<&Alert> {
        self.alerts.iter().find(|alert| alert.id == id)
    }

    /// Ids of the alerts that should be auto-dismissed, as of now.
    ///
    /// Taken once when the alert area mounts; alerts pushed later are not
    /// scheduled.
    pub fn auto_dismissable(&self) -> Vec<AlertId> {
        self.alerts
            .iter()
            .filter(|alert| !alert.permanent)
            .map(|alert| alert.id)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }
}

/// Toast identifier derived from the creation time in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub fn millis(&self) -> u64 {
        self.0
    }

    /// DOM id of the toast element, `toast-<millis>`.
    pub fn element_id(&self) -> String {
        format!("toast-{}", self.0)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Shown,
    /// Fading out; removed when the transition ends.
    Hiding,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub severity: Severity,
    pub message: String,
    pub phase: ToastPhase,
}

/// Alerts and toasts of the current page.
#[derive(Clone, Debug)]
pub struct Notifications {
    alerts: AlertBoard,
    toasts: Vec<Toast>,
    container_created: bool,
    last_toast_id: Option<u64>,
    clock: fn() -> u64,
}

impl Notifications {
    /// `clock` returns the current time in milliseconds and seeds toast ids.
    pub fn new(clock: fn() -> u64) -> Self {
        Self {
            alerts: AlertBoard::new(),
            toasts: Vec::new(),
            container_created: false,
            last_toast_id: None,
            clock,
        }
    }

    pub fn alerts(&self) -> &AlertBoard {
        &self.alerts
    }

    pub fn alerts_mut(&mut self) -> &mut AlertBoard {
        &mut self.alerts
    }

    pub fn push_alert(&mut self, severity: Severity, message: impl Into<String>) -> AlertId {
        self.alerts.push(severity, message)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn toast(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id == id)
    }

    /// Whether the toast container exists. It is created by the first toast
    /// and stays for the rest of the page's life.
    pub fn container_created(&self) -> bool {
        self.container_created
    }

    fn next_toast_id(&mut self) -> ToastId {
        let now = (self.clock)();
        let id = match self.last_toast_id {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last_toast_id = Some(id);
        ToastId(id)
    }
}

impl NotificationWidgetFactory for Notifications {
    fn present(&mut self, message: &str, severity: Severity) -> ToastId {
        if !self.container_created {
            tracing::debug!("creating toast container");
            self.container_created = true;
        }
        let id = self.next_toast_id();
        self.toasts.push(Toast {
            id,
            severity,
            message: message.to_string(),
            phase: ToastPhase::Shown,
        });
        tracing::debug!(%id, %severity, "toast shown");
        id
    }

    fn hide_toast(&mut self, id: ToastId) -> bool {
        match self.toasts.iter_mut().find(|toast| toast.id == id) {
            Some(toast) if toast.phase == ToastPhase::Shown => {
                toast.phase = ToastPhase::Hiding;
                true
            }
            _ => false,
        }
    }

    fn remove_toast(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        let removed = self.toasts.len() < before;
        if removed {
            tracing::debug!(%id, "toast removed");
        }
        removed
    }

    fn close_alert(&mut self, id: AlertId) -> bool {
        self.alerts.close(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frozen_clock() -> u64 {
        1_700_000_000_000
    }

    #[test]
    fn test_container_created_once() {
        let mut n = Notifications::new(frozen_clock);
        assert!(!n.container_created());

        n.present("Salvo", Severity::Success);
        assert!(n.container_created());

        let id = n.present("De novo", Severity::Info);
        assert!(n.container_created());
        assert_eq!(n.toasts().len(), 2);
        assert_eq!(n.toasts()[1].id, id);
    }

    #[test]
    fn test_toast_ids_unique_within_same_millisecond() {
        let mut n = Notifications::new(frozen_clock);
        let a = n.present("a", Severity::Info);
        let b = n.present("b", Severity::Info);
        let c = n.present("c", Severity::Info);

        assert_eq!(a.millis(), 1_700_000_000_000);
        assert!(a < b && b < c);
        assert_eq!(a.element_id(), "toast-1700000000000");
    }

    #[test]
    fn test_toast_hide_then_remove() {
        let mut n = Notifications::new(frozen_clock);
        let id = n.present("Tarefa criada", Severity::Success);

        assert!(n.hide_toast(id));
        assert_eq!(n.toast(id).map(|t| t.phase), Some(ToastPhase::Hiding));
        // Hiding twice is a no-op
        assert!(!n.hide_toast(id));

        assert!(n.remove_toast(id));
        assert!(n.toasts().is_empty());
        assert!(!n.remove_toast(id));
        assert!(!n.hide_toast(id));
        assert!(n.container_created());
    }

    #[test]
    fn test_auto_dismissable_skips_permanent() {
        let mut board = AlertBoard::new();
        let a = board.push(Severity::Success, "Login realizado");
        let _p = board.push_permanent(Severity::Warning, "Manutenção às 22h");
        let c = board.push(Severity::Danger, "Erro");

        assert_eq!(board.auto_dismissable(), vec![a, c]);
    }

    #[test]
    fn test_close_missing_alert_is_noop() {
        let mut n = Notifications::new(frozen_clock);
        let id = n.push_alert(Severity::Info, "Bem-vindo");

        assert!(n.close_alert(id));
        assert!(n.alerts().is_empty());
        assert!(!n.close_alert(id));
    }

    #[test]
    fn test_alert_ids_not_reused_after_close() {
        let mut board = AlertBoard::new();
        let a = board.push(Severity::Info, "a");
        board.close(a);
        let b = board.push(Severity::Info, "b");
        assert_ne!(a, b);
        assert_eq!(board.get(b).map(|alert| alert.message.as_str()), Some("b"));
    }
}
