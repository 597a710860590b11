use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Contextual tag that picks the color of an alert or toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    #[default]
    Info,
    Light,
    Dark,
}

/// A severity tag that is not one of the known names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity tag `{0}`")]
pub struct UnknownSeverity(pub String);

impl Severity {
    pub const ALL: [Severity; 8] = [
        Severity::Primary,
        Severity::Secondary,
        Severity::Success,
        Severity::Danger,
        Severity::Warning,
        Severity::Info,
        Severity::Light,
        Severity::Dark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Primary => "primary",
            Severity::Secondary => "secondary",
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Light => "light",
            Severity::Dark => "dark",
        }
    }

    /// Background class for toasts, e.g. `bg-success`.
    pub fn background_class(&self) -> String {
        format!("bg-{}", self.as_str())
    }

    /// Alert class, e.g. `alert-danger`.
    pub fn alert_class(&self) -> String {
        format!("alert-{}", self.as_str())
    }

    /// Parses a tag, falling back to [`Severity::Info`] for unknown names.
    pub fn from_tag_or_default(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|e: UnknownSeverity| {
            tracing::warn!("{e}, using info");
            Severity::default()
        })
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}
