pub mod routes;
pub mod all_bookings;

pub use all_bookings::AllBookings;
