//! Free-text search control

use dioxus::prelude::*;

/// Controlled text input; reports every edit
#[component]
pub fn SearchInput(
    value: String,
    onchange: EventHandler<String>,
    #[props(default = "Search...".to_string())]
    placeholder: String,
) -> Element {
    rsx! {
        div { class: "c-filter-field c-filter-field--search",
            input {
                r#type: "search",
                class: "c-filter-field__input",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| onchange.call(evt.value()),
            }
        }
    }
}
