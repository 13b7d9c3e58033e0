//! Gender category selector

use dioxus::prelude::*;

/// Selectable category codes and their labels. The empty code means any.
pub const CATEGORY_OPTIONS: [(&str, &str); 3] = [
    ("male", "Male"),
    ("female", "Female"),
    ("unisex", "Unisex"),
];

pub fn category_label(code: &str) -> Option<&'static str> {
    CATEGORY_OPTIONS
        .iter()
        .find(|(value, _)| *value == code)
        .map(|(_, label)| *label)
}

/// Controlled select; the placeholder entry maps to the empty code
#[component]
pub fn CategorySelect(
    value: String,
    onchange: EventHandler<String>,
    #[props(default = "Select Gender".to_string())]
    placeholder: String,
) -> Element {
    rsx! {
        div { class: "c-filter-field c-filter-field--category",
            select {
                class: "c-filter-field__select",
                value: "{value}",
                onchange: move |evt| onchange.call(evt.value()),
                option { value: "", selected: value.is_empty(), "{placeholder}" }
                for (code, label) in CATEGORY_OPTIONS {
                    option {
                        value: "{code}",
                        selected: value == code,
                        "{label}"
                    }
                }
            }
        }
    }
}
