use dioxus::prelude::*;
use taskflow::reveal::{card_class, reveal_delay};

use crate::{sleep, use_config, CARDS_CSS};

/// A `.card` that fades in `index * stride` after it mounts.
#[component]
pub fn RevealCard(
    /// Position of the card in its list.
    index: usize,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let config = use_config();
    let mut revealed = use_signal(|| false);
    let delay = reveal_delay(index, config.reveal_stride());

    use_hook(move || {
        spawn(async move {
            sleep(delay).await;
            revealed.set(true);
        })
    });

    let base = if class.is_empty() { "card".to_string() } else { format!("card {class}") };
    let class = card_class(&base, &config.cards.reveal_class, revealed());

    rsx! {
        document::Stylesheet { href: CARDS_CSS }

        div {
            class: "{class}",
            {children}
        }
    }
}
