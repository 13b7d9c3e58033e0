// Utility functions
// Formatting, parsing, helpers

pub mod form_input;

pub use form_input::{format_date_input, format_time_input, parse_date_input, parse_time_input};
