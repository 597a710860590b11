//! # TaskFlow core: UI-free behavior for the TaskFlow Hospital front end
//!
//! Everything here is plain Rust with no Dioxus dependency, so the rules the
//! components follow can be tested without a renderer.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`date_mask`] | Format-as-you-type `dd/mm/yyyy` mask for deadline fields |
//! | [`notify`] | Alert board, toast list and the [`NotificationWidgetFactory`] capability |
//! | [`severity`] | Contextual severity tags shared by alerts and toasts |
//! | [`reveal`] | Staggered card reveal delays |
//! | [`confirm`] | Confirmation guard for destructive actions |
//! | [`models`] | Task records and the in-memory task list |
//! | [`config`] | `taskflow.toml` configuration |

pub mod config;
pub mod confirm;
pub mod date_mask;
pub mod models;
pub mod notify;
pub mod reveal;
pub mod severity;

pub use config::{ConfigError, TaskFlowConfig};
pub use confirm::{ConfirmPrompt, FixedAnswer, DEFAULT_CONFIRM_MESSAGE};
pub use date_mask::format_date_input;
pub use models::{Task, TaskError, TaskId, TaskList, TaskStatus, TaskUpdate};
pub use notify::{
    Alert, AlertBoard, AlertId, NotificationWidgetFactory, Notifications, Toast, ToastId,
    ToastPhase,
};
pub use severity::{Severity, UnknownSeverity};
