//! Start/end date range control
//!
//! Both bounds are reported through their own callback; the page wires the
//! start bound to the generic field setter and the end bound to the dedicated
//! end-date setter.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::shared::utils::{format_date_input, parse_date_input};

#[component]
pub fn DateRangeFilter(
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    on_start_change: EventHandler<Option<DateTime<Utc>>>,
    on_end_change: EventHandler<Option<DateTime<Utc>>>,
) -> Element {
    let start = format_date_input(start_date);
    let end = format_date_input(end_date);

    rsx! {
        div { class: "c-date-range",
            label { class: "c-filter-field c-filter-field--date",
                span { class: "c-filter-field__label", "From" }
                input {
                    r#type: "date",
                    class: "c-filter-field__input",
                    value: "{start}",
                    onchange: move |evt| on_start_change.call(parse_date_input(&evt.value())),
                }
            }
            label { class: "c-filter-field c-filter-field--date",
                span { class: "c-filter-field__label", "To" }
                input {
                    r#type: "date",
                    class: "c-filter-field__input",
                    value: "{end}",
                    onchange: move |evt| on_end_change.call(parse_date_input(&evt.value())),
                }
            }
        }
    }
}
