// Server-side adapters to external systems
pub mod bookings_api;

pub use bookings_api::BookingsApi;
