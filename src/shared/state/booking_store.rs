use crate::domain::models::Booking;
use crate::shared::logging;

/// Shared list of bookings shown by the page.
///
/// Written only by the retrieval pipeline. The store issues the dispatch
/// tokens itself, so they keep increasing for as long as the store lives even
/// when the page that dispatches is mounted again. A response is accepted only
/// when its token is newer than the last accepted one, so a slow early
/// response can never overwrite a later result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingStore {
    bookings: Vec<Booking>,
    issued: u64,
    applied: u64,
    total: Option<u64>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Token of the newest accepted response, 0 if none yet
    pub fn applied_token(&self) -> u64 {
        self.applied
    }

    /// True while the newest issued dispatch has not been settled
    pub fn is_loading(&self) -> bool {
        self.issued > self.applied
    }

    /// Token of the newest issued dispatch, 0 if none yet
    pub fn issued_token(&self) -> u64 {
        self.issued
    }

    /// Issue the token for a new in-flight dispatch
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Apply a successful response. Returns false if it was stale.
    pub fn apply(&mut self, token: u64, bookings: Vec<Booking>, total: Option<u64>) -> bool {
        if !self.accepts(token) {
            return false;
        }

        logging::log_store_applied(token, bookings.len());
        self.bookings = bookings;
        self.total = total;
        self.applied = token;
        true
    }

    /// Apply a failed retrieval. An accepted failure empties the list.
    pub fn fail(&mut self, token: u64) -> bool {
        self.apply(token, Vec::new(), None)
    }

    fn accepts(&self, token: u64) -> bool {
        if token <= self.applied {
            logging::log_store_stale(token, self.applied);
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookings(ids: &[&str]) -> Vec<Booking> {
        ids.iter().map(|id| Booking::new(*id)).collect()
    }

    #[test]
    fn test_starts_empty() {
        let store = BookingStore::new();
        assert!(store.bookings().is_empty());
        assert_eq!(store.applied_token(), 0);
        assert!(!store.is_loading());
    }

    #[test]
    fn test_in_order_responses_apply() {
        let mut store = BookingStore::new();
        let first = store.issue();
        assert_eq!(first, 1);
        assert!(store.is_loading());
        assert!(store.apply(first, bookings(&["a"]), Some(1)));
        assert!(!store.is_loading());

        let second = store.issue();
        assert!(store.apply(second, bookings(&["b", "c"]), Some(2)));
        assert_eq!(store.bookings().len(), 2);
        assert_eq!(store.total(), Some(2));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut store = BookingStore::new();
        let early = store.issue();
        let late = store.issue();

        // The later dispatch finishes first
        assert!(store.apply(late, bookings(&["new"]), None));
        assert!(!store.apply(early, bookings(&["old"]), None));

        assert_eq!(store.bookings()[0].booking_id, "new");
        assert_eq!(store.applied_token(), 2);
    }

    #[test]
    fn test_intermediate_response_applies_until_superseded() {
        let mut store = BookingStore::new();
        let early = store.issue();
        let late = store.issue();

        assert!(store.apply(early, bookings(&["first"]), None));
        assert!(store.is_loading());
        assert!(store.apply(late, bookings(&["second"]), None));
        assert!(!store.is_loading());
        assert_eq!(store.bookings()[0].booking_id, "second");
    }

    #[test]
    fn test_failure_clears_list_only_when_current() {
        let mut store = BookingStore::new();
        let first = store.issue();
        store.apply(first, bookings(&["a"]), None);

        let second = store.issue();
        assert!(store.fail(second));
        assert!(store.bookings().is_empty());

        // Late failure of an older dispatch changes nothing
        let third = store.issue();
        store.apply(third, bookings(&["b"]), None);
        assert!(!store.fail(second));
        assert_eq!(store.bookings().len(), 1);
    }

    #[test]
    fn test_tokens_keep_rising_after_many_dispatches() {
        let mut store = BookingStore::new();
        for _ in 0..5 {
            let token = store.issue();
            store.apply(token, bookings(&["x"]), None);
        }
        assert_eq!(store.applied_token(), 5);

        // A fresh dispatch after earlier results never reuses a settled token
        let next = store.issue();
        assert_eq!(next, 6);
        assert!(store.is_loading());
        assert!(store.apply(next, bookings(&["y"]), None));
        assert_eq!(store.bookings()[0].booking_id, "y");
    }
}
