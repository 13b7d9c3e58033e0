use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::models::{BookingPage, QueryParams};
use crate::infrastructure::BookingsApi;
use crate::shared::errors::AppError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error response for the REST surface
#[derive(Debug)]
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// GET /api/bookings
/// Same parameters as the page query; page and limit default to 1 and 10
pub async fn list_bookings_handler(
    Query(query): Query<QueryParams>,
) -> Result<Json<BookingPage>, ApiError> {
    let api = BookingsApi::shared()?;
    let page = api.fetch(&query).await.map_err(|e| {
        tracing::error!("Failed to list bookings: {}", e);
        e
    })?;

    Ok(Json(page))
}
