use dioxus::prelude::*;
use taskflow::format_date_input;

use crate::use_config;

/// Controlled text input.
///
/// Fields whose `name` is listed under `[date_mask] fields` in the config
/// (`prazo` by default) are masked as `dd/mm/yyyy` on every keystroke; the
/// masked text is what `oninput` receives. Whether a field is masked is
/// decided once, when it is created.
///
/// Masked fields carry no `maxlength`: a paste or a mid-value insert is
/// handed to the mask whole, which keeps the first eight digits.
#[component]
pub fn TextField(
    name: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
) -> Element {
    let date_fields = use_config().date_mask;
    let masked = use_hook(|| date_fields.applies_to(&name));

    rsx! {
        input {
            id: "{id}",
            name: "{name}",
            class: "form-control {class}",
            r#type: "text",
            placeholder: if masked && placeholder.is_empty() { "dd/mm/aaaa".to_string() } else { placeholder.clone() },
            inputmode: if masked { "numeric" } else { "text" },
            required,
            value: "{value}",
            oninput: move |evt: FormEvent| oninput.call(field_input(masked, evt.value())),
        }
    }
}

/// Value handed to `oninput` for the raw text of the element.
fn field_input(masked: bool, raw: String) -> String {
    if masked {
        format_date_input(&raw)
    } else {
        raw
    }
}
