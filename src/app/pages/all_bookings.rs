use dioxus::prelude::*;

use crate::app::components::{BookingResults, Card, CategorySelect, DateRangeFilter, SearchInput, TimeSelector};
use crate::domain::models::{FieldValue, FilterField};
use crate::shared::hooks::{use_booking_filters, use_booking_store, use_query_dispatcher};

/// Filterable list of all bookings
#[component]
pub fn AllBookings() -> Element {
    let store = use_booking_store();
    let mut filters = use_booking_filters();
    let snapshot = use_query_dispatcher(filters, store);

    let active_filters = snapshot.read().active_count();
    let bookings = store.read().bookings().to_vec();
    let loading = store.read().is_loading();

    rsx! {
        div { class: "c-bookings-page", "data-loading": "{loading}",
            Card { title: "Bookings Filter".to_string(), class: "c-card--filter".to_string(),
                div { class: "c-bookings-filter",
                    div { class: "c-bookings-filter__item c-bookings-filter__item--search",
                        SearchInput {
                            value: filters.search(),
                            placeholder: "Search bookings...".to_string(),
                            onchange: move |value| filters.set_search(value),
                        }
                    }
                    div { class: "c-bookings-filter__item",
                        CategorySelect {
                            value: filters.category(),
                            placeholder: "Select Gender".to_string(),
                            onchange: move |value| filters.set_category(value),
                        }
                    }
                    div { class: "c-bookings-filter__item",
                        TimeSelector {
                            value: filters.slot(),
                            label: "Select Time".to_string(),
                            onchange: move |value| filters.set_slot(value),
                        }
                    }
                    div { class: "c-bookings-filter__item c-bookings-filter__item--range",
                        DateRangeFilter {
                            start_date: filters.start_date(),
                            end_date: filters.end_date(),
                            on_start_change: move |value| {
                                filters.set_field(FilterField::StartDate, FieldValue::Instant(value))
                            },
                            on_end_change: move |value| filters.set_end_date(value),
                        }
                    }
                }
                if active_filters > 0 {
                    div { class: "c-bookings-filter__actions",
                        button {
                            class: "c-btn c-btn--ghost c-btn--sm",
                            onclick: move |_| filters.clear(),
                            "Clear filters ({active_filters})"
                        }
                    }
                }
            }

            BookingResults { bookings }
        }
    }
}
