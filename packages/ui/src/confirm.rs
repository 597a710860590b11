//! Blocking confirmation before destructive actions.

use taskflow::ConfirmPrompt;

use crate::use_config;

/// `window.confirm` in the browser.
///
/// Without a window (native renderers, tests) the prompt cannot be shown and
/// the answer is `false`, so the guarded action does not run.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConfirm;

impl ConfirmPrompt for BrowserConfirm {
    #[cfg(target_arch = "wasm32")]
    fn ask(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            tracing::error!("confirm: no window available");
            return false;
        };
        match window.confirm_with_message(message) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::error!("confirm failed: {e:?}");
                false
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn ask(&self, message: &str) -> bool {
        tracing::warn!(message, "confirm: no dialog on this target, declining");
        false
    }
}

/// Confirmation guard carrying the configured default message.
#[derive(Clone, Debug, PartialEq)]
pub struct Confirm {
    default_message: String,
}

impl Confirm {
    pub fn new(default_message: impl Into<String>) -> Self {
        Self {
            default_message: default_message.into(),
        }
    }

    /// Asks with `message`, or the configured default when `None`.
    pub fn ask(&self, message: Option<&str>) -> bool {
        self.ask_with(&BrowserConfirm, message)
    }

    pub fn ask_with(&self, prompt: &impl ConfirmPrompt, message: Option<&str>) -> bool {
        prompt.ask(message.unwrap_or(&self.default_message))
    }
}

pub fn use_confirm() -> Confirm {
    Confirm::new(use_config().confirm.default_message)
}
