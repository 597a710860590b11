use dioxus::prelude::*;
use taskflow::TaskFlowConfig;

/// The configuration provided by the app root, or the defaults if none was provided.
pub fn use_config() -> TaskFlowConfig {
    try_use_context::<TaskFlowConfig>().unwrap_or_default()
}
