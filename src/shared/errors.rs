use thiserror::Error;

use crate::domain::models::FilterError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),
}

impl AppError {
    /// Whether the failure came from the bookings API rather than this server
    pub fn is_upstream(&self) -> bool {
        matches!(self, AppError::Http(_) | AppError::Upstream { .. } | AppError::Decode(_))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Http(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::FilterField;

    #[test]
    fn test_upstream_classification() {
        assert!(AppError::Http("timeout".into()).is_upstream());
        assert!(AppError::Upstream { status: 503, body: String::new() }.is_upstream());
        assert!(!AppError::Config("missing url".into()).is_upstream());
    }

    #[test]
    fn test_filter_error_converts() {
        let err: AppError = FilterError::UnknownField("foo".into()).into();
        assert_eq!(err.to_string(), "Filter error: Unknown filter field: foo");
        assert!(!err.is_upstream());

        let err: AppError = FilterError::KindMismatch {
            field: FilterField::Slot,
            expected: crate::domain::models::FieldKind::Time,
        }
        .into();
        assert_eq!(err.to_string(), "Filter error: Field `slot` expects a time value");
    }
}
