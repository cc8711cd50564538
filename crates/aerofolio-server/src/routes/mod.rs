//! HTTP route handlers.

pub mod meta;
pub mod pages;
pub mod stats;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use aerofolio_core::error::SiteError;

/// HTTP wrapper for `SiteError` (the core crate stays transport-free).
pub struct ApiError(pub SiteError);

impl From<SiteError> for ApiError {
    fn from(e: SiteError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            SiteError::NotFound => StatusCode::NOT_FOUND,
            SiteError::BadRequest(_) | SiteError::UnsupportedVersion => StatusCode::BAD_REQUEST,
            SiteError::StatsUnavailable(_) | SiteError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        status.into_response()
    }
}

/// Router fallback: anything outside the declared surface is a plain 404.
pub async fn fallback() -> ApiError {
    ApiError(SiteError::NotFound)
}
