//! Time-of-day slot selector

use chrono::NaiveTime;
use dioxus::prelude::*;

use crate::shared::utils::{format_time_input, parse_time_input};

/// Controlled `<input type="time">`. Clearing the input reports `None`.
#[component]
pub fn TimeSelector(
    value: Option<NaiveTime>,
    onchange: EventHandler<Option<NaiveTime>>,
    #[props(default = "Select Time".to_string())]
    label: String,
) -> Element {
    let current = format_time_input(value);

    rsx! {
        label { class: "c-filter-field c-filter-field--slot",
            span { class: "c-filter-field__label", "{label}" }
            input {
                r#type: "time",
                class: "c-filter-field__input",
                value: "{current}",
                onchange: move |evt| onchange.call(parse_time_input(&evt.value())),
            }
        }
    }
}
