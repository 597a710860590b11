//! Timers and wall-clock helpers that work in the browser and on native targets.

use std::time::Duration;

/// Single-shot delay. Dropping the future cancels it.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Milliseconds since the Unix epoch. Seeds toast ids.
pub fn now_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
}

/// Today's local date as `dd/mm/yyyy`.
pub fn today() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}
