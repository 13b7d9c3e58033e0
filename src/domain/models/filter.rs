use chrono::{DateTime, NaiveTime, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Names of the five filter fields on the bookings page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Search,
    Category,
    Slot,
    StartDate,
    EndDate,
}

/// Kind of value a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Time,
    Instant,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Time => "time",
            FieldKind::Instant => "instant",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Search,
        FilterField::Category,
        FilterField::Slot,
        FilterField::StartDate,
        FilterField::EndDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Search => "search",
            FilterField::Category => "category",
            FilterField::Slot => "slot",
            FilterField::StartDate => "startDate",
            FilterField::EndDate => "endDate",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FilterField::Search | FilterField::Category => FieldKind::Text,
            FilterField::Slot => FieldKind::Time,
            FilterField::StartDate | FilterField::EndDate => FieldKind::Instant,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Unknown filter field: {0}")]
    UnknownField(String),

    #[error("Field `{field}` expects a {expected} value")]
    KindMismatch { field: FilterField, expected: FieldKind },
}

impl FromStr for FilterField {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search" => Ok(FilterField::Search),
            "category" => Ok(FilterField::Category),
            "slot" => Ok(FilterField::Slot),
            "startDate" => Ok(FilterField::StartDate),
            "endDate" => Ok(FilterField::EndDate),
            other => Err(FilterError::UnknownField(other.to_string())),
        }
    }
}

/// Value held by a single filter field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Time(Option<NaiveTime>),
    Instant(Option<DateTime<Utc>>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Time(_) => FieldKind::Time,
            FieldValue::Instant(_) => FieldKind::Instant,
        }
    }
}

/// Current filter values of one bookings page.
///
/// Equality is structural over all five fields, so two snapshots holding the
/// same values compare equal no matter how they were produced. Instants compare
/// by the moment they represent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub category: String,
    pub slot: Option<NaiveTime>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl FilterState {
    pub fn get_field(&self, field: FilterField) -> FieldValue {
        match field {
            FilterField::Search => FieldValue::Text(self.search.clone()),
            FilterField::Category => FieldValue::Text(self.category.clone()),
            FilterField::Slot => FieldValue::Time(self.slot),
            FilterField::StartDate => FieldValue::Instant(self.start_date),
            FilterField::EndDate => FieldValue::Instant(self.end_date),
        }
    }

    /// Store `value` verbatim. Only the value kind is checked.
    pub fn set_field(&mut self, field: FilterField, value: FieldValue) -> Result<(), FilterError> {
        match (field, value) {
            (FilterField::Search, FieldValue::Text(text)) => self.search = text,
            (FilterField::Category, FieldValue::Text(text)) => self.category = text,
            (FilterField::Slot, FieldValue::Time(time)) => self.slot = time,
            (FilterField::StartDate, FieldValue::Instant(at)) => self.start_date = at,
            (FilterField::EndDate, FieldValue::Instant(at)) => self.end_date = at,
            (field, _) => {
                return Err(FilterError::KindMismatch {
                    field,
                    expected: field.kind(),
                });
            }
        }
        Ok(())
    }

    /// Number of fields that differ from their defaults
    pub fn active_count(&self) -> usize {
        let defaults = FilterState::default();
        FilterField::ALL
            .iter()
            .filter(|field| self.get_field(**field) != defaults.get_field(**field))
            .count()
    }
}
