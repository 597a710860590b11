//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const NOTIFICATIONS_CSS: Asset = asset!("/assets/styling/notifications.css");
pub const CARDS_CSS: Asset = asset!("/assets/styling/cards.css");

mod config;
pub use config::use_config;

mod timer;
pub use timer::{now_millis, sleep, today};

pub mod dismissal;

mod notifier;
pub use notifier::{use_notifier, NotificationProvider, Notifier};

mod flash_alerts;
pub use flash_alerts::FlashAlerts;

mod toast_stack;
pub use toast_stack::ToastStack;

mod text_field;
pub use text_field::TextField;

mod reveal_card;
pub use reveal_card::RevealCard;

mod confirm;
pub use confirm::{use_confirm, BrowserConfirm, Confirm};

mod tasks;
pub use tasks::{use_tasks, TaskProvider};
