use dioxus::prelude::*;

use crate::app::components::category_select::category_label;
use crate::app::components::Card;
use crate::domain::models::Booking;

/// Summary card for one booking
#[component]
pub fn BookingCard(booking: Booking) -> Element {
    let title = booking
        .customer_name
        .clone()
        .unwrap_or_else(|| format!("Booking {}", booking.booking_id));
    let category = booking
        .category
        .as_deref()
        .map(|code| category_label(code).unwrap_or(code).to_string());
    let date = booking.display_date();
    let status_class = booking
        .status
        .as_deref()
        .map(|s| format!("c-booking__status c-booking__status--{}", s.to_lowercase()))
        .unwrap_or_default();

    rsx! {
        Card { title: title, class: "c-card--booking".to_string(),
            dl { class: "c-booking",
                if let Some(service) = booking.service.as_ref() {
                    dt { "Service" }
                    dd { "{service}" }
                }
                if let Some(date) = date {
                    dt { "Date" }
                    dd { "{date}" }
                }
                if let Some(slot) = booking.slot.as_ref() {
                    dt { "Slot" }
                    dd { "{slot}" }
                }
                if let Some(category) = category {
                    dt { "Category" }
                    dd { "{category}" }
                }
                if let Some(email) = booking.email.as_ref() {
                    dt { "Email" }
                    dd { "{email}" }
                }
                if let Some(phone) = booking.phone.as_ref() {
                    dt { "Phone" }
                    dd { "{phone}" }
                }
            }
            if let Some(status) = booking.status.as_ref() {
                span { class: "{status_class}", "{status}" }
            }
            p { class: "c-booking__id", "#{booking.booking_id}" }
        }
    }
}
