use chrono::{DateTime, NaiveTime, Utc};
use dioxus::prelude::*;

use crate::domain::models::{FieldValue, FilterField, FilterState};
use crate::shared::logging;

/// Filter form state of the bookings page.
///
/// Every field, whichever setter touches it, lives in the same
/// `Signal<FilterState>`, so any update is seen as one snapshot change.
#[derive(Clone, Copy, PartialEq)]
pub struct BookingFilters {
    state: Signal<FilterState>,
}

impl BookingFilters {
    /// Current combined value of all fields
    pub fn snapshot(&self) -> FilterState {
        self.state.read().clone()
    }

    pub fn get_field(&self, field: FilterField) -> FieldValue {
        self.state.read().get_field(field)
    }

    pub fn set_field(&mut self, field: FilterField, value: FieldValue) {
        let kind = value.kind();
        match self.state.write().set_field(field, value) {
            Ok(()) => logging::log_filter_update(field, kind.as_str()),
            Err(e) => logging::log_filter_rejected(field, &e.to_string()),
        }
    }

    pub fn search(&self) -> String {
        self.state.read().search.clone()
    }

    pub fn set_search(&mut self, value: String) {
        self.set_field(FilterField::Search, FieldValue::Text(value));
    }

    pub fn category(&self) -> String {
        self.state.read().category.clone()
    }

    pub fn set_category(&mut self, value: String) {
        self.set_field(FilterField::Category, FieldValue::Text(value));
    }

    pub fn slot(&self) -> Option<NaiveTime> {
        self.state.read().slot
    }

    pub fn set_slot(&mut self, value: Option<NaiveTime>) {
        self.set_field(FilterField::Slot, FieldValue::Time(value));
    }

    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.state.read().start_date
    }

    pub fn set_start_date(&mut self, value: Option<DateTime<Utc>>) {
        self.set_field(FilterField::StartDate, FieldValue::Instant(value));
    }

    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.state.read().end_date
    }

    /// Dedicated end-bound setter used by the date range control
    pub fn set_end_date(&mut self, value: Option<DateTime<Utc>>) {
        self.state.write().end_date = value;
        logging::log_filter_update(FilterField::EndDate, "instant");
    }

    /// Reset every field to its default
    pub fn clear(&mut self) {
        self.state.set(FilterState::default());
    }
}

/// Create the filter state for one page instance, all fields at defaults
pub fn use_booking_filters() -> BookingFilters {
    let state = use_signal(FilterState::default);

    BookingFilters { state }
}
