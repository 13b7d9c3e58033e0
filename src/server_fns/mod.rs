//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;

use crate::domain::models::{BookingPage, QueryParams};

/// Retrieve one page of bookings matching `query` from the upstream API
#[server]
pub async fn get_all_bookings(query: QueryParams) -> Result<BookingPage, ServerFnError> {
    use crate::infrastructure::BookingsApi;

    tracing::debug!("get_all_bookings called with: {}", query.to_query_string());

    let api = BookingsApi::shared().map_err(|e| ServerFnError::new(e.to_string()))?;
    let page = api
        .fetch(&query)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(page)
}
