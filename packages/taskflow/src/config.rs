//! # Front-end configuration: `taskflow.toml`
//!
//! Timing and naming knobs for the UI behaviors. The web binary embeds its
//! copy of the file at build time and parses it with
//! [`TaskFlowConfig::from_toml`].
//!
//! ## Structure
//!
//! ```toml
//! [alerts]
//! auto_dismiss_ms = 5000          # flash alerts close after this delay
//!
//! [toasts]
//! auto_hide_ms = 5000             # toasts start hiding after this delay
//! hide_transition_ms = 150        # fade-out length before removal
//! container_id = "toast-container"
//!
//! [cards]
//! reveal_stride_ms = 50           # card i is revealed after i * stride
//! reveal_class = "fade-in"
//!
//! [date_mask]
//! fields = ["prazo"]              # input names that get the dd/mm/yyyy mask
//!
//! [confirm]
//! default_message = "Tem certeza que deseja realizar esta ação?"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`TaskFlowConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`AlertsConfig`] | Auto-dismiss delay for flash alerts (**5 s**). |
//! | [`ToastsConfig`] | Auto-hide delay (**5 s**), hide transition (**150 ms**) and container id. |
//! | [`CardsConfig`] | Reveal stride (**50 ms**) and reveal class. |
//! | [`DateMaskConfig`] | Names of the fields that are masked. |
//! | [`ConfirmConfig`] | Default confirmation message. |
//!
//! Every field has a default, so a missing or empty file is equivalent to the
//! default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::confirm::DEFAULT_CONFIRM_MESSAGE;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration stored in `taskflow.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskFlowConfig {
    #[serde(default)]
    pub alerts: AlertsConfig,
    #[serde(default)]
    pub toasts: ToastsConfig,
    #[serde(default)]
    pub cards: CardsConfig,
    #[serde(default)]
    pub date_mask: DateMaskConfig,
    #[serde(default)]
    pub confirm: ConfirmConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlertsConfig {
    #[serde(default = "default_alert_dismiss_ms")]
    pub auto_dismiss_ms: u64,
}

fn default_alert_dismiss_ms() -> u64 {
    5000
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: default_alert_dismiss_ms(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToastsConfig {
    #[serde(default = "default_toast_hide_ms")]
    pub auto_hide_ms: u64,
    #[serde(default = "default_hide_transition_ms")]
    pub hide_transition_ms: u64,
    #[serde(default = "default_container_id")]
    pub container_id: String,
}

fn default_toast_hide_ms() -> u64 {
    5000
}

fn default_hide_transition_ms() -> u64 {
    150
}

fn default_container_id() -> String {
    "toast-container".to_string()
}

impl Default for ToastsConfig {
    fn default() -> Self {
        Self {
            auto_hide_ms: default_toast_hide_ms(),
            hide_transition_ms: default_hide_transition_ms(),
            container_id: default_container_id(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardsConfig {
    #[serde(default = "default_reveal_stride_ms")]
    pub reveal_stride_ms: u64,
    #[serde(default = "default_reveal_class")]
    pub reveal_class: String,
}

fn default_reveal_stride_ms() -> u64 {
    50
}

fn default_reveal_class() -> String {
    "fade-in".to_string()
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            reveal_stride_ms: default_reveal_stride_ms(),
            reveal_class: default_reveal_class(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DateMaskConfig {
    /// `name` attributes of the inputs that get the date mask.
    #[serde(default = "default_masked_fields")]
    pub fields: Vec<String>,
}

fn default_masked_fields() -> Vec<String> {
    vec!["prazo".to_string()]
}

impl Default for DateMaskConfig {
    fn default() -> Self {
        Self {
            fields: default_masked_fields(),
        }
    }
}

impl DateMaskConfig {
    pub fn applies_to(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field == name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfirmConfig {
    #[serde(default = "default_confirm_message")]
    pub default_message: String,
}

fn default_confirm_message() -> String {
    DEFAULT_CONFIRM_MESSAGE.to_string()
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            default_message: default_confirm_message(),
        }
    }
}

impl TaskFlowConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "taskflow.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn alert_dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.alerts.auto_dismiss_ms)
    }

    pub fn toast_hide_delay(&self) -> Duration {
        Duration::from_millis(self.toasts.auto_hide_ms)
    }

    pub fn toast_hide_transition(&self) -> Duration {
        Duration::from_millis(self.toasts.hide_transition_ms)
    }

    pub fn reveal_stride(&self) -> Duration {
        Duration::from_millis(self.cards.reveal_stride_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = TaskFlowConfig::from_toml("").unwrap();
        assert_eq!(config, TaskFlowConfig::default());
        assert_eq!(config.alert_dismiss_delay(), Duration::from_secs(5));
        assert_eq!(config.reveal_stride(), Duration::from_millis(50));
        assert_eq!(config.toasts.container_id, "toast-container");
        assert!(config.date_mask.applies_to("prazo"));
        assert!(!config.date_mask.applies_to("titulo"));
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = TaskFlowConfig::from_toml(
            r#"
            [toasts]
            auto_hide_ms = 3000

            [date_mask]
            fields = ["prazo", "data_conclusao"]
            "#,
        )
        .unwrap();
        assert_eq!(config.toast_hide_delay(), Duration::from_secs(3));
        assert_eq!(config.toast_hide_transition(), Duration::from_millis(150));
        assert!(config.date_mask.applies_to("data_conclusao"));
        assert_eq!(config.confirm.default_message, DEFAULT_CONFIRM_MESSAGE);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = TaskFlowConfig::default();
        config.cards.reveal_class = "reveal".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(TaskFlowConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_parse_error() {
        let err = TaskFlowConfig::from_toml("[alerts]\nauto_dismiss_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
