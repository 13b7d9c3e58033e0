use serde::{Deserialize, Serialize};

/// A booking as delivered by the bookings API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub slot: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Booking {
    pub fn new(booking_id: impl Into<String>) -> Self {
        Self {
            booking_id: booking_id.into(),
            customer_name: None,
            email: None,
            phone: None,
            category: None,
            service: None,
            slot: None,
            date: None,
            status: None,
        }
    }

    /// Date part of `date` (`YYYY-MM-DD`) when it is an ISO timestamp
    pub fn display_date(&self) -> Option<String> {
        let raw = self.date.as_deref()?;
        match chrono::DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => Some(dt.date_naive().format("%Y-%m-%d").to_string()),
            Err(_) => Some(raw.to_string()),
        }
    }
}

/// One page of bookings returned by the upstream API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingPage {
    #[serde(default, alias = "data")]
    pub bookings: Vec<Booking>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
