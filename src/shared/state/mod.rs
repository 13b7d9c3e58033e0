// Client-side state shared across components
pub mod booking_store;
pub mod dispatcher;

pub use booking_store::BookingStore;
pub use dispatcher::{Dispatch, QueryDispatcher};
