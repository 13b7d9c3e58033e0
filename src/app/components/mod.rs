pub mod card;

// Filter controls
pub mod search_input;
pub mod category_select;
pub mod time_selector;
pub mod date_range_filter;

// Results rendering
pub mod booking_card;
pub mod booking_results;

pub use card::Card;
pub use search_input::SearchInput;
pub use category_select::{CategorySelect, CATEGORY_OPTIONS};
pub use time_selector::TimeSelector;
pub use date_range_filter::DateRangeFilter;
pub use booking_card::BookingCard;
pub use booking_results::{project_results, BookingResults, ResultsView, EMPTY_MESSAGE};
