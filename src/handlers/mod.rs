/// Bookings listing proxied to the upstream API
pub mod bookings;

pub mod health;

pub use bookings::{list_bookings_handler, ApiError};
pub use health::health_handler;
