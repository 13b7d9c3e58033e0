//! Structured logging for the bookings admin
//!
//! Every event carries an `operation` field so client and server logs can be
//! filtered by pipeline stage.

use crate::domain::models::{FilterField, QueryParams};

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    FilterUpdate,
    QueryDispatch,
    StoreApply,
    UpstreamFetch,
    Cache,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::FilterUpdate => "filter_update",
            LogOperation::QueryDispatch => "query_dispatch",
            LogOperation::StoreApply => "store_apply",
            LogOperation::UpstreamFetch => "upstream_fetch",
            LogOperation::Cache => "cache",
        }
    }
}

pub fn log_filter_update(field: FilterField, kind: &str) {
    tracing::trace!(
        operation = LogOperation::FilterUpdate.as_str(),
        field = field.as_str(),
        kind = kind,
        "Filter field updated"
    );
}

pub fn log_filter_rejected(field: FilterField, error: &str) {
    tracing::warn!(
        operation = LogOperation::FilterUpdate.as_str(),
        field = field.as_str(),
        error = error,
        "Filter update rejected"
    );
}

pub fn log_dispatch(token: u64, query: &QueryParams) {
    tracing::debug!(
        operation = LogOperation::QueryDispatch.as_str(),
        token = token,
        query = %query.to_query_string(),
        "Dispatching bookings query"
    );
}

pub fn log_store_applied(token: u64, booking_count: usize) {
    tracing::debug!(
        operation = LogOperation::StoreApply.as_str(),
        token = token,
        booking_count = booking_count,
        "Bookings applied to store"
    );
}

/// A response older than the newest applied one arrived late
pub fn log_store_stale(token: u64, applied: u64) {
    tracing::debug!(
        operation = LogOperation::StoreApply.as_str(),
        token = token,
        applied_token = applied,
        "Discarded stale bookings response"
    );
}

pub fn log_retrieval_error(token: u64, error: &str) {
    tracing::error!(
        operation = LogOperation::QueryDispatch.as_str(),
        token = token,
        error = error,
        "Bookings retrieval failed"
    );
}

pub fn log_upstream_request(url: &str) {
    tracing::info!(
        operation = LogOperation::UpstreamFetch.as_str(),
        url = url,
        "Requesting bookings from upstream"
    );
}

pub fn log_upstream_result(url: &str, booking_count: usize) {
    tracing::info!(
        operation = LogOperation::UpstreamFetch.as_str(),
        url = url,
        booking_count = booking_count,
        "Upstream bookings received"
    );
}

pub fn log_upstream_error(url: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::UpstreamFetch.as_str(),
        url = url,
        error = error,
        "Upstream bookings request failed"
    );
}

pub fn log_cache_hit(key: &str) {
    tracing::debug!(
        operation = LogOperation::Cache.as_str(),
        key = key,
        "Bookings cache hit"
    );
}
