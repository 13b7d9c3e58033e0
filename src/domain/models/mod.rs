// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod booking;
pub mod filter;
pub mod query;

pub use booking::{Booking, BookingPage};
pub use filter::{FieldKind, FieldValue, FilterError, FilterField, FilterState};
pub use query::{format_instant, QueryParams, DEFAULT_LIMIT, DEFAULT_PAGE, SLOT_FORMAT};
