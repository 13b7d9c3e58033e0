use crate::domain::models::{FilterState, QueryParams};
use crate::shared::state::BookingStore;

/// One outbound bookings query tagged with its dispatch token
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub token: u64,
    pub query: QueryParams,
}

/// Turns filter snapshots into dispatches.
///
/// Emits exactly one [`Dispatch`] per distinct snapshot, the first observed
/// snapshot included. A snapshot equal by value to the previous one emits
/// nothing. There is no debounce: every distinct snapshot dispatches.
///
/// Tokens are issued by the store the results land in, so they keep rising
/// across page instances sharing that store.
#[derive(Debug, Clone, Default)]
pub struct QueryDispatcher {
    last_snapshot: Option<FilterState>,
}

impl QueryDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, snapshot: &FilterState, store: &mut BookingStore) -> Option<Dispatch> {
        if self.last_snapshot.as_ref() == Some(snapshot) {
            return None;
        }

        self.last_snapshot = Some(snapshot.clone());

        Some(Dispatch {
            token: store.issue(),
            query: QueryParams::from(snapshot),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Booking;
    use chrono::{NaiveTime, TimeZone, Utc};

    #[test]
    fn test_mount_dispatches_once_with_pagination_only() {
        let mut store = BookingStore::new();
        let mut dispatcher = QueryDispatcher::new();
        let defaults = FilterState::default();

        let first = dispatcher.observe(&defaults, &mut store).unwrap();
        assert_eq!(first.token, 1);
        assert_eq!(first.query, QueryParams { page: 1, limit: 10, ..QueryParams::default() });

        // Re-render with the same values
        assert!(dispatcher.observe(&defaults, &mut store).is_none());
        assert!(dispatcher.observe(&defaults.clone(), &mut store).is_none());
        assert_eq!(store.issued_token(), 1);
    }

    #[test]
    fn test_every_distinct_snapshot_dispatches() {
        let mut store = BookingStore::new();
        let mut dispatcher = QueryDispatcher::new();
        let mut state = FilterState::default();
        dispatcher.observe(&state, &mut store);

        // Keystrokes, no debounce
        let mut tokens = Vec::new();
        for text in ["j", "jo", "joh"] {
            state.search = text.to_string();
            let dispatch = dispatcher.observe(&state, &mut store).unwrap();
            assert_eq!(dispatch.query.search.as_deref(), Some(text));
            tokens.push(dispatch.token);
        }

        assert_eq!(tokens, vec![2, 3, 4]);
    }

    #[test]
    fn test_returning_to_previous_value_dispatches_again() {
        let mut store = BookingStore::new();
        let mut dispatcher = QueryDispatcher::new();
        let defaults = FilterState::default();
        let changed = FilterState {
            category: "female".to_string(),
            ..FilterState::default()
        };

        assert!(dispatcher.observe(&defaults, &mut store).is_some());
        assert!(dispatcher.observe(&changed, &mut store).is_some());
        let back = dispatcher.observe(&defaults, &mut store).unwrap();
        assert_eq!(back.token, 3);
        assert_eq!(back.query.category, None);
    }

    #[test]
    fn test_equal_instants_do_not_redispatch() {
        let mut store = BookingStore::new();
        let mut dispatcher = QueryDispatcher::new();
        let utc = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let from_offset = chrono::DateTime::parse_from_rfc3339("2024-01-01T05:30:00+05:30")
            .unwrap()
            .with_timezone(&Utc);

        let a = FilterState {
            start_date: Some(utc),
            slot: NaiveTime::from_hms_opt(14, 30, 0),
            ..FilterState::default()
        };
        let b = FilterState {
            start_date: Some(from_offset),
            slot: NaiveTime::from_hms_opt(14, 30, 0),
            ..FilterState::default()
        };

        assert!(dispatcher.observe(&a, &mut store).is_some());
        assert!(dispatcher.observe(&b, &mut store).is_none());
    }

    #[test]
    fn test_remounted_page_results_are_applied() {
        let mut store = BookingStore::new();

        // First page instance filters a few times
        let mut first_page = QueryDispatcher::new();
        let mut state = FilterState::default();
        for text in ["", "a", "ab"] {
            state.search = text.to_string();
            let dispatch = first_page.observe(&state, &mut store).unwrap();
            store.apply(dispatch.token, vec![Booking::new(format!("old-{}", text))], None);
        }
        assert_eq!(store.bookings()[0].booking_id, "old-ab");

        // Page mounts again with default filters
        let mut second_page = QueryDispatcher::new();
        let mount = second_page.observe(&FilterState::default(), &mut store).unwrap();
        assert_eq!(mount.query, QueryParams::default());
        assert!(mount.token > store.applied_token());

        assert!(store.apply(mount.token, vec![Booking::new("fresh")], None));
        assert_eq!(store.bookings()[0].booking_id, "fresh");
        assert!(!store.is_loading());
    }
}
