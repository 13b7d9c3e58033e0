use dioxus::prelude::*;

use crate::app::pages::routes::Route;

/// Top bar with the admin brand and section links
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "c-navbar",
            Link {
                to: Route::AllBookings {},
                class: "c-navbar__logo",
                "Bookings Admin"
            }
            div { class: "c-navbar__links",
                Link {
                    to: Route::AllBookings {},
                    class: "c-navbar__link",
                    active_class: "c-navbar__link--active",
                    "All Bookings"
                }
            }
        }
    }
}
