//! Staggered fade-in schedule for cards.

use std::time::Duration;

/// Delay before the card at `index` gets its reveal class.
pub fn reveal_delay(index: usize, stride: Duration) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    stride.saturating_mul(index)
}

/// Class list of a card, with `reveal_class` appended once revealed.
pub fn card_class(base: &str, reveal_class: &str, revealed: bool) -> String {
    if revealed && !reveal_class.is_empty() {
        format!("{base} {reveal_class}")
    } else {
        base.to_string()
    }
}
