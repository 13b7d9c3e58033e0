use dioxus::prelude::*;

use crate::domain::models::FilterState;
use crate::server_fns::get_all_bookings;
use crate::shared::hooks::BookingFilters;
use crate::shared::logging;
use crate::shared::state::{BookingStore, Dispatch, QueryDispatcher};

/// Fetch bookings whenever the filter snapshot changes.
///
/// Runs once on mount with the default snapshot and then once per distinct
/// snapshot. Tokens come from the shared `BookingStore`, so a remounted page
/// keeps counting up from where the previous instance stopped. The retrieval
/// is spawned and not awaited here; its result lands in the store, which drops
/// responses that arrive out of order.
pub fn use_query_dispatcher(
    filters: BookingFilters,
    mut store: Signal<BookingStore>,
) -> Memo<FilterState> {
    let snapshot = use_memo(move || filters.snapshot());
    let mut dispatcher = use_signal(QueryDispatcher::new);

    use_effect(move || {
        let current = snapshot();
        let Some(Dispatch { token, query }) =
            dispatcher.write().observe(&current, &mut store.write())
        else {
            return;
        };

        logging::log_dispatch(token, &query);

        spawn(async move {
            match get_all_bookings(query).await {
                Ok(page) => {
                    store.write().apply(token, page.bookings, page.total);
                }
                Err(e) => {
                    logging::log_retrieval_error(token, &e.to_string());
                    store.write().fail(token);
                }
            }
        });
    });

    snapshot
}

/// Provide the shared store to descendants of the calling component
pub fn use_booking_store_provider() -> Signal<BookingStore> {
    use_context_provider(|| Signal::new(BookingStore::new()))
}

/// Shared store provided by an ancestor
pub fn use_booking_store() -> Signal<BookingStore> {
    use_context::<Signal<BookingStore>>()
}
