use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::filter::FilterState;

/// Page requested on every dispatch
pub const DEFAULT_PAGE: u32 = 1;
/// Page size requested on every dispatch
pub const DEFAULT_LIMIT: u32 = 10;

/// Time-of-day format sent for the `slot` parameter (24h)
pub const SLOT_FORMAT: &str = "%H:%M";

/// Normalized payload sent to the bookings retrieval.
///
/// Empty or absent filters are `None` and are left out entirely on the wire,
/// never sent as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: None,
            category: None,
            slot: None,
            start_date: None,
            end_date: None,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// ISO 8601 in UTC with millisecond precision, e.g. `2024-01-01T00:00:00.000Z`
pub fn format_instant(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<&FilterState> for QueryParams {
    fn from(filters: &FilterState) -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: non_empty(&filters.search),
            category: non_empty(&filters.category),
            slot: filters.slot.map(|t| t.format(SLOT_FORMAT).to_string()),
            start_date: filters.start_date.as_ref().map(format_instant),
            end_date: filters.end_date.as_ref().map(format_instant),
        }
    }
}

impl QueryParams {
    /// Ordered `(key, value)` pairs, absent parameters skipped
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        let optional = [
            ("search", &self.search),
            ("category", &self.category),
            ("slot", &self.slot),
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                pairs.push((key, value.clone()));
            }
        }
        pairs
    }

    /// Percent-encoded URL query without the leading `?`
    pub fn to_query_string(&self) -> String {
        self.pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
