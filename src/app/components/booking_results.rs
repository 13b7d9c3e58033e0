//! Booking results list
//!
//! Pure projection of the shared list: an empty-state message or one card per
//! booking, keyed by `bookingId`.

use dioxus::prelude::*;
use std::collections::HashSet;

use crate::app::components::BookingCard;
use crate::domain::models::Booking;

pub const EMPTY_MESSAGE: &str = "No Booking Found";

/// What the results area shows for a given list
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    Empty,
    Cards(Vec<Booking>),
}

/// Order is preserved. A repeated `bookingId` keeps its first occurrence so
/// card keys stay unique.
pub fn project_results(bookings: &[Booking]) -> ResultsView {
    if bookings.is_empty() {
        return ResultsView::Empty;
    }

    let mut seen = HashSet::new();
    let cards = bookings
        .iter()
        .filter(|b| seen.insert(b.booking_id.as_str()))
        .cloned()
        .collect();

    ResultsView::Cards(cards)
}

#[component]
pub fn BookingResults(bookings: Vec<Booking>) -> Element {
    match project_results(&bookings) {
        ResultsView::Empty => rsx! {
            p { class: "c-booking-results__empty", "{EMPTY_MESSAGE}" }
        },
        ResultsView::Cards(cards) => rsx! {
            div { class: "c-booking-results",
                for booking in cards {
                    div {
                        key: "{booking.booking_id}",
                        class: "c-booking-results__item",
                        BookingCard { booking: booking.clone() }
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(view: &ResultsView) -> Vec<&str> {
        match view {
            ResultsView::Empty => Vec::new(),
            ResultsView::Cards(cards) => cards.iter().map(|b| b.booking_id.as_str()).collect(),
        }
    }

    #[test]
    fn test_empty_list_shows_empty_state() {
        assert_eq!(project_results(&[]), ResultsView::Empty);
        assert_eq!(EMPTY_MESSAGE, "No Booking Found");
    }

    #[test]
    fn test_one_card_per_booking_in_order() {
        let bookings = vec![Booking::new("a"), Booking::new("b")];
        let view = project_results(&bookings);

        assert_eq!(ids(&view), vec!["a", "b"]);
    }

    #[test]
    fn test_repeated_ids_keep_first() {
        let mut first = Booking::new("a");
        first.customer_name = Some("first".into());
        let mut repeat = Booking::new("a");
        repeat.customer_name = Some("repeat".into());

        let view = project_results(&[first, Booking::new("b"), repeat]);

        assert_eq!(ids(&view), vec!["a", "b"]);
        if let ResultsView::Cards(cards) = view {
            assert_eq!(cards[0].customer_name.as_deref(), Some("first"));
        }
    }
}
