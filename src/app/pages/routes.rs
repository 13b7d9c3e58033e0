use dioxus::prelude::*;

use crate::app::layouts::Navbar;
use crate::app::pages::AllBookings;
use crate::shared::hooks::use_booking_store_provider;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[redirect("/", || Route::AllBookings {})]
        #[route("/services/allbookings")]
        AllBookings {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    // One bookings store for the whole app, written only by the query dispatcher
    use_booking_store_provider();

    use_effect(|| {
        tracing::info!("Bookings admin initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Generated by build.rs from assets/css
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Navbar {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "c-not-found",
            h2 { "Page not found" }
            p { "/{path}" }
            Link { to: Route::AllBookings {}, "Back to bookings" }
        }
    }
}
