// Custom Dioxus hooks
pub mod use_booking_filters;
pub mod use_query_dispatcher;

pub use use_booking_filters::{use_booking_filters, BookingFilters};
pub use use_query_dispatcher::{use_booking_store, use_booking_store_provider, use_query_dispatcher};
