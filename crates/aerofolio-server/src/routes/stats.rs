//! Airports statistics endpoint.
//!
//! The provider is invoked on every request and the response carries
//! `Cache-Control: no-store`, so no layer between the database and the
//! client may serve a stale aggregate. The body is the provider's JSON
//! re-emitted byte for byte.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::app_state::AppState;

pub async fn airport_stats(State(app): State<AppState>) -> Response {
    app.metrics().http_requests.inc(&[("route", "airport_stats")]);

    match app.provider().get_stats().await {
        Ok(stats) => {
            app.metrics().stats_requests.inc(&[("outcome", "ok")]);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/json"),
                    (header::CACHE_CONTROL, "no-store"),
                ],
                stats.into_json(),
            )
                .into_response()
        }
        Err(err) => {
            app.metrics().stats_requests.inc(&[("outcome", "error")]);
            app.metrics()
                .provider_errors
                .inc(&[("code", err.client_code().as_str())]);
            tracing::error!(error = %err, "stats provider failed");
            // No partial or default body on failure.
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
